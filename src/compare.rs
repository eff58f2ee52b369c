//! Side-by-side comparison of all disciplines.
//!
//! Runs FCFS, SJF, SRTF and Priority over one workload. Each run gets its
//! own records, so the parallel variant needs no synchronization beyond
//! joining the threads.

use std::thread;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::Process;
use crate::scheduler::{Algorithm, ScheduleOutcome};

/// Metric used to rank disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    AverageWaitingTime,
    AverageTurnaroundTime,
}

/// Outcomes of every discipline over the same workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// One outcome per discipline, in [`Algorithm::ALL`] order.
    pub outcomes: Vec<ScheduleOutcome>,
}

impl Comparison {
    /// Outcome for a given discipline.
    pub fn outcome(&self, algorithm: Algorithm) -> Option<&ScheduleOutcome> {
        self.outcomes.iter().find(|o| o.algorithm == algorithm)
    }

    /// Discipline with the lowest value of `metric`.
    ///
    /// Ties go to the discipline listed first.
    pub fn best_by(&self, metric: MetricKind) -> Option<Algorithm> {
        let value = |o: &ScheduleOutcome| match metric {
            MetricKind::AverageWaitingTime => o.metrics.average_waiting_time,
            MetricKind::AverageTurnaroundTime => o.metrics.average_turnaround_time,
        };

        self.outcomes
            .iter()
            .min_by(|a, b| value(a).total_cmp(&value(b)))
            .map(|o| o.algorithm)
    }
}

/// Runs every discipline sequentially.
///
/// # Errors
/// The first discipline to reject the workload ends the comparison with
/// its [`SimError::Validation`](crate::SimError::Validation).
pub fn compare(processes: &[Process]) -> Result<Comparison> {
    let outcomes = Algorithm::ALL
        .into_iter()
        .map(|algorithm| algorithm.run(processes))
        .collect::<Result<Vec<_>>>()?;
    Ok(Comparison { outcomes })
}

/// Runs every discipline on its own scoped thread.
///
/// Produces the same [`Comparison`] (or error) as [`compare`].
pub fn compare_parallel(processes: &[Process]) -> Result<Comparison> {
    let results: Vec<Result<ScheduleOutcome>> = thread::scope(|scope| {
        let handles: Vec<_> = Algorithm::ALL
            .into_iter()
            .map(|algorithm| {
                // Each thread takes its own copy of the descriptors
                let owned = processes.to_vec();
                scope.spawn(move || algorithm.run(&owned))
            })
            .collect();

        handles
            .into_iter()
            .zip(Algorithm::ALL)
            .map(|(handle, algorithm)| {
                handle.join().unwrap_or_else(|panic| {
                    debug!(%algorithm, "simulation thread panicked");
                    std::panic::resume_unwind(panic)
                })
            })
            .collect()
    });

    let outcomes = results.into_iter().collect::<Result<Vec<_>>>()?;
    Ok(Comparison { outcomes })
}
