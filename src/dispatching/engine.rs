//! Rule engine for multi-key dispatch.
//!
//! Composes selection rules lexicographically and finishes with an
//! explicit tie-breaker, giving a total order over ready processes.
//!
//! # Reference
//! Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

use std::cmp::Ordering;
use std::sync::Arc;

use super::{RuleScore, SelectionRule};
use crate::models::ProcessRecord;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreaker {
    /// Lowest PID wins (default).
    #[default]
    ByPid,
    /// Earliest position in the candidate slice wins.
    FirstEncountered,
}

/// A composable rule engine for process selection.
///
/// Rules are applied in sequence; a later rule is consulted only when
/// every earlier rule ties.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::LowestPriorityValue)
///     .with_rule(rules::ArrivalOrder);
/// assert_eq!(engine.rule_names(), vec!["PRIORITY", "FIFO"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn SelectionRule>>,
    tie_breaker: TieBreaker,
}

impl RuleEngine {
    /// Creates an empty rule engine that breaks ties by PID.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule.
    pub fn with_rule<R: SelectionRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the final tie-breaking strategy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Scores from each rule for one record.
    pub fn evaluate(&self, record: &ProcessRecord) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(record)).collect()
    }

    /// Compares two records by the rule chain, then the tie-breaker.
    ///
    /// Under [`TieBreaker::FirstEncountered`] full ties compare equal,
    /// leaving position to decide.
    pub fn compare(&self, a: &ProcessRecord, b: &ProcessRecord) -> Ordering {
        for rule in &self.rules {
            match rule.evaluate(a).cmp(&rule.evaluate(b)) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        match self.tie_breaker {
            TieBreaker::ByPid => a.pid().cmp(&b.pid()),
            TieBreaker::FirstEncountered => Ordering::Equal,
        }
    }

    /// Sorts all records (highest priority first).
    ///
    /// Returns indices into `records`. The sort is stable.
    pub fn sort_indices(&self, records: &[ProcessRecord]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..records.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&records[a], &records[b]));
        indices
    }

    /// Returns the index of the best record among those passing `eligible`.
    pub fn select_best<F>(&self, records: &[ProcessRecord], eligible: F) -> Option<usize>
    where
        F: Fn(&ProcessRecord) -> bool,
    {
        records
            .iter()
            .enumerate()
            .filter(|&(_, r)| eligible(r))
            // min_by keeps the first of equal elements
            .min_by(|(_, a), (_, b)| self.compare(a, b))
            .map(|(idx, _)| idx)
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .finish()
    }
}
