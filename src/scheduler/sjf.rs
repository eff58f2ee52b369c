//! Shortest Job First (non-preemptive).
//!
//! Whenever the CPU frees up, dispatches the arrived, unstarted process
//! with the smallest total burst. Equal bursts go to the lowest PID
//! unless another tie-breaker is configured.
//!
//! # Reference
//! Smith (1956), "Various optimizers for single-stage production"

use super::non_preemptive::run_to_completion;
use super::{Algorithm, CpuScheduler, Simulation};
use crate::dispatching::{rules, RuleEngine, TieBreaker};
use crate::models::Process;

/// Shortest Job First scheduler.
#[derive(Debug, Clone)]
pub struct Sjf {
    engine: RuleEngine,
}

impl Sjf {
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::ShortestBurst),
        }
    }

    /// Overrides the final tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.engine = self.engine.with_tie_breaker(tie_breaker);
        self
    }
}

impl Default for Sjf {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for Sjf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Sjf
    }

    fn simulate(&self, processes: &[Process]) -> Simulation {
        run_to_completion(processes, &self.engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttSegment;

    #[test]
    fn test_sjf_picks_shortest_available() {
        let processes = vec![
            Process::new(1, 7),
            Process::new(2, 4).with_arrival(1),
            Process::new(3, 1).with_arrival(2),
            Process::new(4, 4).with_arrival(3),
        ];

        let outcome = Sjf::new().run(&processes).unwrap();
        assert_eq!(
            outcome.gantt.segments(),
            &[
                GanttSegment::new(1, 0, 7),
                GanttSegment::new(3, 7, 8),
                GanttSegment::new(2, 8, 12),
                GanttSegment::new(4, 12, 16),
            ]
        );
    }

    #[test]
    fn test_sjf_does_not_preempt() {
        let processes = vec![
            Process::new(1, 10),
            Process::new(2, 1).with_arrival(1),
        ];

        let outcome = Sjf::new().run(&processes).unwrap();
        assert_eq!(outcome.gantt.len(), 2);
        assert_eq!(outcome.record(1).unwrap().completion_time, Some(10));
        assert_eq!(outcome.record(2).unwrap().waiting_time, Some(9));
    }

    #[test]
    fn test_sjf_tie_breaks_by_pid() {
        let processes = vec![Process::new(5, 3), Process::new(2, 3)];

        let outcome = Sjf::new().run(&processes).unwrap();
        assert_eq!(outcome.gantt.segments()[0].pid, 2);
    }

    #[test]
    fn test_sjf_first_encountered_tie_break() {
        let processes = vec![Process::new(5, 3), Process::new(2, 3)];

        let outcome = Sjf::new()
            .with_tie_breaker(TieBreaker::FirstEncountered)
            .run(&processes)
            .unwrap();
        assert_eq!(outcome.gantt.segments()[0].pid, 5);
    }
}
