//! CPU scheduling disciplines and metrics.
//!
//! Each discipline consumes process descriptors and produces completed
//! records plus a Gantt timeline. Runs are independent: every run works
//! on its own fresh records, so the same descriptor slice can be fed to
//! any number of runs, sequentially or in parallel.
//!
//! # Disciplines
//!
//! | Algorithm | Preemptive | Selection key |
//! |-----------|-----------|---------------|
//! | FCFS | no | arrival, PID |
//! | SJF | no | burst, PID |
//! | SRTF | yes | remaining, PID |
//! | Priority | no | priority value, arrival, PID |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod algorithm;
mod fcfs;
mod kpi;
mod non_preemptive;
mod priority;
mod sjf;
mod srtf;

pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use fcfs::Fcfs;
pub use kpi::ScheduleMetrics;
pub use priority::PriorityScheduler;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SimError};
use crate::models::{GanttChart, Pid, Process, ProcessRecord};
use crate::validation::validate_processes;

/// Raw output of a discipline before metrics are derived.
#[derive(Debug, Clone)]
pub struct Simulation {
    pub records: Vec<ProcessRecord>,
    pub gantt: GanttChart,
}

/// Complete result of one validated run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Discipline that produced this outcome.
    pub algorithm: Algorithm,
    /// One record per input process, sorted by PID.
    pub records: Vec<ProcessRecord>,
    /// Aggregate metrics over `records`.
    pub metrics: ScheduleMetrics,
    /// CPU ownership timeline.
    pub gantt: GanttChart,
}

impl ScheduleOutcome {
    /// Record for a given PID.
    pub fn record(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.records
            .binary_search_by_key(&pid, ProcessRecord::pid)
            .ok()
            .map(|idx| &self.records[idx])
    }

    /// Fraction of the makespan the CPU was busy.
    pub fn cpu_utilization(&self) -> f64 {
        self.metrics.cpu_utilization(&self.gantt)
    }
}

/// A CPU scheduling discipline.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Which discipline this is.
    fn algorithm(&self) -> Algorithm;

    /// Simulates the discipline over `processes`.
    ///
    /// Assumes the input already passed validation.
    fn simulate(&self, processes: &[Process]) -> Simulation;

    /// Validates `processes`, simulates, and derives metrics.
    ///
    /// # Errors
    /// [`SimError::Validation`] listing every offending descriptor. No
    /// records are produced in that case.
    fn run(&self, processes: &[Process]) -> Result<ScheduleOutcome> {
        let algorithm = self.algorithm();

        if let Err(errors) = validate_processes(processes) {
            warn!(%algorithm, errors = errors.len(), "rejected workload");
            return Err(SimError::Validation(errors));
        }

        let Simulation { mut records, gantt } = self.simulate(processes);
        records.sort_by_key(ProcessRecord::pid);
        let metrics = ScheduleMetrics::calculate(&records);

        info!(
            %algorithm,
            processes = records.len(),
            segments = gantt.len(),
            avg_waiting = metrics.average_waiting_time,
            avg_turnaround = metrics.average_turnaround_time,
            throughput = metrics.throughput,
            "simulation complete"
        );

        Ok(ScheduleOutcome {
            algorithm,
            records,
            metrics,
            gantt,
        })
    }
}
