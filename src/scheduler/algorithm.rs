//! Discipline catalogue.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{CpuScheduler, Fcfs, PriorityScheduler, ScheduleOutcome, Sjf, Srtf};
use crate::error::Result;
use crate::models::Process;

/// The four supported scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First (non-preemptive).
    Sjf,
    /// Shortest Remaining Time First (preemptive).
    Srtf,
    /// Priority (non-preemptive).
    Priority,
}

/// Returned when an algorithm name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scheduling algorithm: {0}")]
pub struct ParseAlgorithmError(pub String);

impl Algorithm {
    /// All disciplines in comparison order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::Priority,
    ];

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::Priority => "Priority",
        }
    }

    /// Whether the discipline can take the CPU away mid-burst.
    pub fn is_preemptive(self) -> bool {
        matches!(self, Algorithm::Srtf)
    }

    /// A scheduler for this discipline with the default PID tie-break.
    pub fn scheduler(self) -> Box<dyn CpuScheduler> {
        match self {
            Algorithm::Fcfs => Box::new(Fcfs::new()),
            Algorithm::Sjf => Box::new(Sjf::new()),
            Algorithm::Srtf => Box::new(Srtf::new()),
            Algorithm::Priority => Box::new(PriorityScheduler::new()),
        }
    }

    /// Validates and simulates `processes` under this discipline.
    pub fn run(self, processes: &[Process]) -> Result<ScheduleOutcome> {
        self.scheduler().run(processes)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "srtf" | "srt" => Ok(Algorithm::Srtf),
            "priority" | "prio" => Ok(Algorithm::Priority),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("FCFS".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("srtf".parse::<Algorithm>(), Ok(Algorithm::Srtf));
        assert_eq!("Priority".parse::<Algorithm>(), Ok(Algorithm::Priority));
        assert!("round-robin".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_scheduler_matches_algorithm() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.scheduler().algorithm(), algorithm);
        }
    }

    #[test]
    fn test_only_srtf_preempts() {
        let preemptive: Vec<_> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.is_preemptive())
            .collect();
        assert_eq!(preemptive, vec![Algorithm::Srtf]);
    }
}
