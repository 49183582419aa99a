//! Fatal scheduling errors.
//!
//! Anything here stops schedule construction. Quality shortfalls are
//! reported as [`ScheduleWarning`](crate::models::ScheduleWarning)s instead.

use thiserror::Error;

use crate::validation::ValidationError;

/// An error that prevents a schedule from being built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// Required fielder count has no matching format.
    #[error("unsupported number of fielders {count} (supported: {min}..={max})")]
    UnsupportedFielderCount {
        /// Requested count.
        count: u32,
        /// Smallest supported count.
        min: u32,
        /// Largest supported count.
        max: u32,
    },

    /// A configuration value is out of range.
    #[error("invalid schedule configuration: {0}")]
    InvalidConfig(String),

    /// Position and strength lists differ in length.
    #[error("{player} has mismatched number of positions ({positions}) and strengths ({strengths})")]
    MismatchedStrengths {
        /// Player name.
        player: String,
        /// Number of positions given.
        positions: usize,
        /// Number of strengths given.
        strengths: usize,
    },

    /// Text is not a known position abbreviation.
    #[error("unknown position '{0}'")]
    UnknownPosition(String),

    /// The roster failed input validation.
    #[error("invalid roster: {}", summarize(.0))]
    InvalidRoster(Vec<ValidationError>),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
