//! Aggregate performance metrics.
//!
//! Computes the standard CPU scheduling indicators from the records of
//! one run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting Time | Sum of waiting over completed / total process count |
//! | Avg Turnaround Time | Sum of turnaround over completed / total process count |
//! | Makespan | Latest completion - earliest arrival, among completed |
//! | Throughput | Completed count / makespan (`+inf` when makespan <= 0) |
//!
//! Dividing by the total count rather than the completed count charges a
//! discipline for every process it leaves unscheduled.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{GanttChart, ProcessRecord, Ticks};

/// Aggregate metrics for one run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Mean waiting time over all processes.
    pub average_waiting_time: f64,
    /// Mean turnaround time over all processes.
    pub average_turnaround_time: f64,
    /// Completed processes per tick. `f64::INFINITY` when makespan <= 0.
    pub throughput: f64,
    /// Span from the first arrival to the last completion (completed only).
    pub makespan: Ticks,
    /// Number of completed processes.
    pub completed: usize,
    /// Number of processes in the run.
    pub total: usize,
}

impl ScheduleMetrics {
    /// Computes metrics using `records.len()` as the process count.
    pub fn calculate(records: &[ProcessRecord]) -> Self {
        Self::calculate_for(records, records.len())
    }

    /// Computes metrics, dividing averages by `total`.
    ///
    /// Returns all-zero metrics when no record has completed.
    pub fn calculate_for(records: &[ProcessRecord], total: usize) -> Self {
        let mut completed: usize = 0;
        // Per-record values fit in Ticks; their sums need not
        let mut total_waiting: i128 = 0;
        let mut total_turnaround: i128 = 0;
        let mut first_arrival = Ticks::MAX;
        let mut last_completion = Ticks::MIN;

        for record in records {
            let (Some(completion), Some(turnaround), Some(waiting)) = (
                record.completion_time,
                record.turnaround_time,
                record.waiting_time,
            ) else {
                continue;
            };

            completed += 1;
            total_waiting += i128::from(waiting);
            total_turnaround += i128::from(turnaround);
            first_arrival = first_arrival.min(record.arrival_time());
            last_completion = last_completion.max(completion);
        }

        if completed == 0 {
            return Self {
                total,
                ..Self::default()
            };
        }

        // completed > 0 implies total > 0 for well-formed callers
        let divisor = total.max(completed) as f64;
        let makespan = last_completion - first_arrival;
        let throughput = if makespan > 0 {
            completed as f64 / makespan as f64
        } else {
            f64::INFINITY
        };

        Self {
            average_waiting_time: total_waiting as f64 / divisor,
            average_turnaround_time: total_turnaround as f64 / divisor,
            throughput,
            makespan,
            completed,
            total,
        }
    }

    /// Fraction of the makespan the CPU was busy according to `gantt`.
    ///
    /// Returns 0.0 when the makespan is not positive.
    pub fn cpu_utilization(&self, gantt: &GanttChart) -> f64 {
        if self.makespan <= 0 {
            return 0.0;
        }
        gantt.busy_ticks() as f64 / self.makespan as f64
    }

    /// Whether every process in the run completed.
    pub fn all_completed(&self) -> bool {
        self.completed == self.total
    }
}
