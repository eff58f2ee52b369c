//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Computes, offline, what a scheduling discipline would do with a fixed
//! and fully known set of processes: per-process timing, aggregate
//! metrics, and a Gantt timeline of CPU ownership.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessRecord`, `GanttChart`
//! - **`dispatching`**: Selection rules and the tie-breaking rule engine
//! - **`scheduler`**: FCFS, SJF, SRTF, Priority, and `ScheduleMetrics`
//! - **`validation`**: Input integrity checks (PIDs, arrival, burst)
//! - **`workload`**: Descriptor sources (random generator, JSON files)
//! - **`compare`**: Runs every discipline over one workload
//! - **`report`**: Plain-text tables and timelines
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::Algorithm;
//!
//! let processes = vec![
//!     Process::new(1, 8),
//!     Process::new(2, 4).with_arrival(1),
//! ];
//! let outcome = Algorithm::Srtf.run(&processes).unwrap();
//! assert_eq!(outcome.gantt.len(), 3);
//! ```
//!
//! # Scope
//!
//! Single CPU, CPU-bound processes, no aging, no external interrupts.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod compare;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod monitoring;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{Result, SimError};
