//! Error types for flashcard-scheduler.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using SchedulerError.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors that can occur while scheduling reviews.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("invalid rating {value}: expected an integer from 0 to 5")]
    InvalidRating { value: String },

    #[error("invalid date {value:?}: expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("next review date out of range: {date} + {days} days")]
    DateOutOfRange { date: NaiveDate, days: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration parse error: {0}")]
    Config(#[from] serde_json::Error),
}
