//! Selection rules and rule engine for CPU dispatch.
//!
//! Every discipline picks the next process the same way: score each
//! ready record with one or more rules, compare scores lexicographically,
//! and fall back to a final tie-breaker. Tie-breaks are part of the
//! engine's configuration, never an artifact of iteration order.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//! use u_cpusched::models::{Process, ProcessRecord};
//!
//! let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
//! let records = ProcessRecord::from_processes(&[
//!     Process::new(1, 8),
//!     Process::new(2, 3),
//! ]);
//! assert_eq!(engine.select_best(&records, |_| true), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::ProcessRecord;
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = dispatched first. Scores are integers so that
/// comparison is exact and total.
pub type RuleScore = i64;

/// A rule that ranks ready processes.
///
/// # Score Convention
/// **Lower score = higher priority.**
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "FIFO").
    fn name(&self) -> &'static str;

    /// Scores a record. Lower wins.
    fn evaluate(&self, record: &ProcessRecord) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
