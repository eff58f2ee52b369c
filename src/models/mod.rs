//! CPU scheduling domain models.
//!
//! Provides the data types shared by every scheduling discipline: the
//! immutable input descriptor, the per-run working record, and the
//! Gantt timeline.
//!
//! # Lifecycle
//!
//! | Type | Created by | Mutated by | Frozen when |
//! |------|-----------|-----------|-------------|
//! | Process | descriptor source | never | always |
//! | ProcessRecord | algorithm run | that run only | burst fully consumed |
//! | GanttChart | algorithm run | that run only | run returns |

mod gantt;
mod process;
mod record;

pub use gantt::{GanttChart, GanttSegment};
pub use process::{Pid, Process, Ticks};
pub use record::ProcessRecord;
