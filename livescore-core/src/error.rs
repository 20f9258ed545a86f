//! Error types for attempt-result operations.
//!
//! DNF, DNS and skipped attempts are values, never errors. These enums only
//! cover malformed caller input.

use thiserror::Error;

/// Invalid arguments passed to scoring operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Missing argument: eventId")]
    MissingEventId,
    #[error("Unknown event: {0}")]
    UnknownEvent(String),
    #[error("Invalid number of attempt results, expected 3 or 5, given {given}.")]
    InvalidAttemptCount { given: usize },
}

/// Errors raised when scoring configuration invariants are violated.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: i32,
        value: i32,
    },
    #[error("packed time cap {cap} is below the per-item allowance {per_item}")]
    PackedCapBelowPerItem { cap: i32, per_item: i32 },
    #[error("invalid scoring config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while parsing typed-in attempt results.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized time {0:?}, expected [[H:]M:]S[.cc]")]
    InvalidTime(String),
    #[error("unrecognized move count {0:?}")]
    InvalidMoveCount(String),
    #[error("unrecognized multi-blind result {0:?}, expected solved/attempted time")]
    InvalidPacked(String),
    #[error("{field} out of range in {input:?}")]
    OutOfRange { field: &'static str, input: String },
}
