//! Process descriptor sources.
//!
//! The engine only ever sees a slice of [`Process`](crate::models::Process)
//! values. This module supplies them:
//!
//! - **`generator`**: seeded random workloads
//! - **`loader`**: JSON files keyed by `PID`, `ArrivalTime`, `BurstTime`, `Priority`
//! - **`interactive`**: prompted keyboard entry from any `BufRead`

mod generator;
pub mod interactive;
pub mod loader;

pub use generator::{WorkloadConfig, WorkloadGenerator};
