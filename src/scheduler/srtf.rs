//! Shortest Remaining Time First (preemptive).
//!
//! # Algorithm
//!
//! Ticks one time unit per iteration while the CPU is busy:
//!
//! 1. Among arrived processes with remaining work, pick the one with the
//!    least remaining time (ties: lowest PID by default).
//! 2. Stamp its start time on its first tick, run it for one tick, and
//!    record the tick in the Gantt chart (merging with the previous slice
//!    when the owner did not change).
//! 3. When its remaining time reaches zero, stamp completion.
//!
//! While nothing is ready the clock jumps straight to the next arrival,
//! which yields the same timeline as idling tick by tick.
//!
//! # Complexity
//! O(B * n) where B = total burst ticks, n = processes.

use tracing::{debug, trace};

use super::{Algorithm, CpuScheduler, Simulation};
use crate::dispatching::{rules, RuleEngine, TieBreaker};
use crate::models::{GanttChart, Process, ProcessRecord, Ticks};

/// Shortest Remaining Time First scheduler.
#[derive(Debug, Clone)]
pub struct Srtf {
    engine: RuleEngine,
}

impl Srtf {
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::ShortestRemaining),
        }
    }

    /// Overrides the final tie-breaker.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.engine = self.engine.with_tie_breaker(tie_breaker);
        self
    }
}

impl Default for Srtf {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for Srtf {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Srtf
    }

    fn simulate(&self, processes: &[Process]) -> Simulation {
        let mut records = ProcessRecord::from_processes(processes);
        let mut gantt = GanttChart::new();
        let mut time: Ticks = 0;
        let mut unfinished = records.len();

        while unfinished > 0 {
            let Some(idx) = self.engine.select_best(&records, |r| r.is_ready(time)) else {
                let next_arrival = records
                    .iter()
                    .filter(|r| r.remaining_time > 0)
                    .map(ProcessRecord::arrival_time)
                    .min();
                match next_arrival {
                    Some(next) => {
                        debug!(from = time, until = next, "cpu idle");
                        time = next;
                        continue;
                    }
                    None => break,
                }
            };

            let record = &mut records[idx];
            if !record.is_started() {
                debug!(pid = record.pid(), start = time, "first dispatch");
            }
            record.start(time);
            record.consume(1);
            gantt.record_tick(record.pid(), time);
            trace!(pid = record.pid(), tick = time, remaining = record.remaining_time);

            time += 1;

            if record.remaining_time == 0 {
                record.complete(time);
                unfinished -= 1;
                debug!(pid = record.pid(), completion = time, "completed");
            }
        }

        Simulation { records, gantt }
    }
}
