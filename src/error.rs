//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors surfaced to callers of the simulator.
#[derive(Error, Debug)]
pub enum SimError {
    /// The descriptor set was rejected before simulation began.
    #[error("invalid workload: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("workload I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("workload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Interactive entry received something other than the expected value.
    #[error("invalid input on line {line}: {message}")]
    Input { line: usize, message: String },

    /// Generator bounds cannot produce valid descriptors.
    #[error("invalid workload config: {0}")]
    InvalidWorkloadConfig(String),
}

impl SimError {
    /// Validation details, if this is a validation failure.
    pub fn validation_errors(&self) -> Option<&[ValidationError]> {
        match self {
            SimError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
