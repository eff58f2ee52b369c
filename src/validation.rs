//! Input validation for process workloads.
//!
//! Checks descriptors before any simulation starts. Detects:
//! - Zero PIDs
//! - Duplicate PIDs
//! - Negative arrival times
//! - Non-positive burst times
//! - Workloads whose last possible completion does not fit in [`Ticks`]
//!
//! Every problem is reported, each naming the offending descriptor by
//! PID and input position.

use std::collections::HashSet;

use crate::models::{Process, Ticks};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Position of the offending descriptor in the input.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// PID must be a positive integer.
    InvalidPid,
    /// Two descriptors share the same PID.
    DuplicatePid,
    /// Arrival time is before t=0.
    NegativeArrival,
    /// Burst time is zero or negative.
    NonPositiveBurst,
    /// Latest arrival plus total burst exceeds `Ticks::MAX`.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Validates a descriptor set.
///
/// An empty set is valid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();
    let mut horizon = Horizon::default();

    for (index, p) in processes.iter().enumerate() {
        if p.pid == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidPid,
                index,
                format!("Process at index {index} has PID 0; PIDs must be positive"),
            ));
        } else if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                index,
                format!("Duplicate PID {} at index {index}", p.pid),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                index,
                format!(
                    "P{} has negative arrival time {}",
                    p.pid, p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                index,
                format!(
                    "P{} has non-positive burst time {}",
                    p.pid, p.burst_time
                ),
            ));
        }

        if p.arrival_time >= 0 && p.burst_time > 0 && !horizon.extend(p) {
            errors.push(ValidationError::new(
                ValidationErrorKind::HorizonOverflow,
                index,
                format!(
                    "P{} pushes the last completion past {}",
                    p.pid,
                    Ticks::MAX
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on every clock value a discipline can reach.
///
/// No schedule completes later than the latest arrival plus the sum of
/// all bursts, so when that fits in [`Ticks`] neither does any
/// completion, turnaround, or waiting time overflow.
#[derive(Debug, Default)]
struct Horizon {
    latest_arrival: Ticks,
    total_burst: Ticks,
    overflowed: bool,
}

impl Horizon {
    /// Adds one descriptor. Returns `false` the first time the bound
    /// overflows; later calls return `true` so the error is reported once.
    fn extend(&mut self, p: &Process) -> bool {
        if self.overflowed {
            return true;
        }

        let latest_arrival = self.latest_arrival.max(p.arrival_time);
        let fits = self
            .total_burst
            .checked_add(p.burst_time)
            .and_then(|total| latest_arrival.checked_add(total).map(|_| total));

        match fits {
            Some(total_burst) => {
                self.latest_arrival = latest_arrival;
                self.total_burst = total_burst;
                true
            }
            None => {
                self.overflowed = true;
                false
            }
        }
    }
}
