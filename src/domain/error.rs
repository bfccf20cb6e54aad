//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid filter values and malformed trip data.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("unknown month: {0}")]
    UnknownMonth(String),

    #[error("unknown day: {0}")]
    UnknownDay(String),

    #[error("expected 'yes' or 'no', got: {0}")]
    UnknownAnswer(String),

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("invalid start time in row {row}: {value:?}")]
    InvalidTimestamp { row: usize, value: String },

    #[error("invalid trip duration in row {row}: {value:?}")]
    InvalidDuration { row: usize, value: String },

    #[error("invalid birth year in row {row}: {value:?}")]
    InvalidBirthYear { row: usize, value: String },
}
