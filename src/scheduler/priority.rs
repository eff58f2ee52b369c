//! Priority scheduling (non-preemptive).
//!
//! Whenever the CPU frees up, dispatches the arrived, unstarted process
//! with the lowest priority value. Ties go to the earlier arrival, then
//! the lowest PID. Burst length plays no part.
//!
//! Long waits for low-importance processes are possible; there is no aging.

use super::non_preemptive::run_to_completion;
use super::{Algorithm, CpuScheduler, Simulation};
use crate::dispatching::{rules, RuleEngine, TieBreaker};
use crate::models::Process;

/// Priority scheduler.
#[derive(Debug, Clone)]
pub struct PriorityScheduler {
    engine: RuleEngine,
}

impl PriorityScheduler {
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new()
                .with_rule(rules::LowestPriorityValue)
                .with_rule(rules::ArrivalOrder),
        }
    }

    /// Overrides the tie-breaker applied after priority and arrival.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.engine = self.engine.with_tie_breaker(tie_breaker);
        self
    }
}

impl Default for PriorityScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for PriorityScheduler {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Priority
    }

    fn simulate(&self, processes: &[Process]) -> Simulation {
        run_to_completion(processes, &self.engine)
    }
}
