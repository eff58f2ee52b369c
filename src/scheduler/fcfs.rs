//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Order processes by `(arrival, pid)`.
//! 2. Walk the order once with a clock starting at 0, idling forward to
//!    each arrival that lies in the future.
//! 3. Run each process to completion and emit one segment.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use tracing::debug;

use super::{Algorithm, CpuScheduler, Simulation};
use crate::dispatching::{rules, RuleEngine};
use crate::models::{GanttChart, Process, ProcessRecord, Ticks};

/// First-Come-First-Served scheduler (non-preemptive).
#[derive(Debug, Clone)]
pub struct Fcfs {
    engine: RuleEngine,
}

impl Fcfs {
    /// Creates a scheduler that orders by arrival, then PID.
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new().with_rule(rules::ArrivalOrder),
        }
    }
}

impl Default for Fcfs {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuScheduler for Fcfs {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Fcfs
    }

    fn simulate(&self, processes: &[Process]) -> Simulation {
        let unordered = ProcessRecord::from_processes(processes);
        let order = self.engine.sort_indices(&unordered);
        let mut records: Vec<ProcessRecord> =
            order.into_iter().map(|i| unordered[i].clone()).collect();

        let mut gantt = GanttChart::new();
        let mut time: Ticks = 0;

        for record in &mut records {
            if time < record.arrival_time() {
                debug!(from = time, until = record.arrival_time(), "cpu idle");
                time = record.arrival_time();
            }

            let burst = record.burst_time();
            let end = time + burst;
            record.start(time);
            record.consume(burst);
            record.complete(end);
            gantt.push_segment(record.pid(), time, end);
            debug!(pid = record.pid(), start = time, end, "dispatched");

            time = end;
        }

        Simulation { records, gantt }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GanttSegment;

    #[test]
    fn test_fcfs_basic() {
        let processes = vec![
            Process::new(1, 5),
            Process::new(2, 3).with_arrival(1),
        ];

        let outcome = Fcfs::new().run(&processes).unwrap();
        assert_eq!(
            outcome.gantt.segments(),
            &[GanttSegment::new(1, 0, 5), GanttSegment::new(2, 5, 8)]
        );
        assert_eq!(outcome.record(1).unwrap().waiting_time, Some(0));
        assert_eq!(outcome.record(2).unwrap().waiting_time, Some(4));
    }

    #[test]
    fn test_fcfs_orders_by_arrival_not_input() {
        let processes = vec![
            Process::new(1, 2).with_arrival(4),
            Process::new(2, 3),
        ];

        let outcome = Fcfs::new().run(&processes).unwrap();
        assert_eq!(outcome.gantt.segments()[0].pid, 2);
        assert_eq!(outcome.record(1).unwrap().start_time, Some(4));
    }

    #[test]
    fn test_fcfs_equal_arrival_lower_pid_first() {
        let processes = vec![
            Process::new(9, 1).with_arrival(2),
            Process::new(3, 6).with_arrival(2),
        ];

        let outcome = Fcfs::new().run(&processes).unwrap();
        let pids: Vec<_> = outcome.gantt.segments().iter().map(|s| s.pid).collect();
        assert_eq!(pids, vec![3, 9]);
    }

    #[test]
    fn test_fcfs_idle_gap() {
        let processes = vec![
            Process::new(1, 2),
            Process::new(2, 2).with_arrival(5),
        ];

        let outcome = Fcfs::new().run(&processes).unwrap();
        assert_eq!(outcome.gantt.idle_ticks(), 3);
        assert_eq!(outcome.record(2).unwrap().waiting_time, Some(0));
    }
}
