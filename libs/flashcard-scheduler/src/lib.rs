//! SM-2 spaced repetition scheduling for flashcards.
//!
//! Provides:
//! - The SM-2 update (`calculate_sm2`, `Sm2`) over a card's scheduling state
//! - Due-date checks and study queue assembly
//! - The six-point quality scale and the four learner-facing rating options
//! - Scheduler settings loaded from JSON
//!
//! Everything is pure: callers pass in "today" and persist the returned state.

pub mod algorithm;
pub mod config;
pub mod dates;
pub mod due;
pub mod error;
pub mod rating;
pub mod types;

pub use algorithm::sm2::{calculate_sm2, review_card, Sm2, Sm2Result};
pub use algorithm::{get_algorithm, SchedulingResult, SpacedRepetitionAlgorithm};
pub use config::SchedulerConfig;
pub use due::{is_due, is_due_str, Scheduled, StudyQueue};
pub use error::{Result, SchedulerError};
pub use rating::{option_for_shortcut, Quality, RatingChoice, RatingOption, RatingTone, RATING_OPTIONS};
pub use types::{
    Algorithm, CardSchedule, CardStatus, ReviewLog, DEFAULT_EASINESS_FACTOR, MIN_EASINESS_FACTOR,
};
