//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of calendar rules.
/// Queries over the shop graph are total and never produce one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("date arithmetic out of range: {date} + {amount}")]
    DateOutOfRange { date: String, amount: String },

    #[error("invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidDateFormat(String),

    #[error("invalid time interval (expected day|week|year, optionally *N): {0}")]
    InvalidInterval(String),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
