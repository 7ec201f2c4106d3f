//! Spaced repetition algorithm implementations.

pub mod sm2;

use crate::error::Result;
use crate::rating::Quality;
use crate::types::{CardSchedule, ReviewLog};
use chrono::NaiveDate;

/// Result of scheduling a card after review.
#[derive(Debug, Clone, PartialEq)]
pub struct SchedulingResult {
    pub new_state: CardSchedule,
    pub next_due: NaiveDate,
}

impl SchedulingResult {
    /// Log entry describing the transition from `before` to this result.
    pub fn review_log(&self, before: &CardSchedule, rating: Quality, today: NaiveDate) -> ReviewLog {
        ReviewLog::new(before, &self.new_state, rating, today)
    }
}

/// Trait for spaced repetition algorithms.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Algorithm identifier.
    fn name(&self) -> &'static str;

    /// Calculate next review state after a review on `today`.
    fn schedule(
        &self,
        state: &CardSchedule,
        rating: Quality,
        today: NaiveDate,
    ) -> Result<SchedulingResult>;

    /// Initial state for a new card.
    fn initial_state(&self) -> CardSchedule;
}

/// Get algorithm by name, with default parameters.
pub fn get_algorithm(name: &str) -> Option<Box<dyn SpacedRepetitionAlgorithm>> {
    match name {
        "sm2" => Some(Box::new(sm2::Sm2::default())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_algorithms() {
        let algorithm = get_algorithm("sm2").unwrap();
        assert_eq!(algorithm.name(), "sm2");
        assert_eq!(algorithm.initial_state(), CardSchedule::default());
    }

    #[test]
    fn unknown_algorithm_is_none() {
        assert!(get_algorithm("fsrs").is_none());
        assert!(get_algorithm("").is_none());
    }
}
