//! Process descriptor model.
//!
//! A process descriptor is the immutable input record of a simulation:
//! who the process is, when it arrives, how much CPU it needs, and how
//! important it is.
//!
//! # Time Representation
//! All times are integer ticks relative to the simulation epoch (t=0).
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Simulation time unit.
pub type Ticks = i64;

/// Process identifier.
pub type Pid = u32;

/// An immutable process descriptor.
///
/// Serialized with the field names `PID`, `ArrivalTime`, `BurstTime` and
/// `Priority`, which is the structured-file format accepted by
/// [`crate::workload::loader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (positive).
    #[serde(rename = "PID")]
    pub pid: Pid,
    /// Tick at which the process becomes ready.
    #[serde(rename = "ArrivalTime")]
    pub arrival_time: Ticks,
    /// Total CPU ticks required.
    #[serde(rename = "BurstTime")]
    pub burst_time: Ticks,
    /// Scheduling priority (lower value = more important).
    #[serde(rename = "Priority", default)]
    pub priority: i32,
}

impl Process {
    /// Creates a process arriving at t=0 with priority 0.
    pub fn new(pid: Pid, burst_time: Ticks) -> Self {
        Self {
            pid,
            arrival_time: 0,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: Ticks) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: Ticks) -> bool {
        self.arrival_time <= time
    }
}
