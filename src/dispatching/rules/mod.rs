//! Built-in selection rules.
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{RuleScore, SelectionRule};
use crate::models::ProcessRecord;

/// First In, First Out: earliest arrival first.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl SelectionRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn evaluate(&self, record: &ProcessRecord) -> RuleScore {
        record.arrival_time()
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival Time"
    }
}

/// Shortest total burst first.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, record: &ProcessRecord) -> RuleScore {
        record.burst_time()
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest remaining burst first.
///
/// Identical to [`ShortestBurst`] for records that have not run yet.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, record: &ProcessRecord) -> RuleScore {
        record.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Most important first, where a lower priority value is more important.
#[derive(Debug, Clone, Copy)]
pub struct LowestPriorityValue;

impl SelectionRule for LowestPriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, record: &ProcessRecord) -> RuleScore {
        RuleScore::from(record.priority())
    }

    fn description(&self) -> &'static str {
        "Lowest Priority Value"
    }
}
