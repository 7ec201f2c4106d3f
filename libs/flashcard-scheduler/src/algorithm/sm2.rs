//! SM-2 spaced repetition algorithm.
//!
//! SuperMemo 2 on the six-point quality scale:
//!
//! 1. `EF' = EF + (0.1 - q * (0.08 + q * 0.02))` where `q = 5 - quality`,
//!    floored at the minimum ease and rounded to two decimals.
//! 2. A failed review (quality below 3) resets repetitions and schedules the
//!    card for tomorrow.
//! 3. Successful reviews use fixed first and second intervals, then grow the
//!    previous interval by the new ease factor.

use super::{SchedulingResult, SpacedRepetitionAlgorithm};
use crate::dates::add_days;
use crate::error::Result;
use crate::rating::Quality;
use crate::types::{CardSchedule, DEFAULT_EASINESS_FACTOR, MIN_EASINESS_FACTOR};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Interval after any failed review, whatever the configured steps.
pub const FAILED_INTERVAL: u32 = 1;

/// SM-2 algorithm with configurable parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sm2 {
    pub initial_ease: f64,
    pub minimum_ease: f64,
    /// Interval after the first success in a streak.
    pub first_interval: u32,
    /// Interval after the second consecutive success.
    pub second_interval: u32,
}

impl Default for Sm2 {
    fn default() -> Self {
        Self {
            initial_ease: DEFAULT_EASINESS_FACTOR,
            minimum_ease: MIN_EASINESS_FACTOR,
            first_interval: 1,
            second_interval: 6,
        }
    }
}

/// Post-review values handed back to storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sm2Result {
    pub easiness_factor: f64,
    pub interval_days: u32,
    pub repetitions: u32,
    pub next_review_date: NaiveDate,
}

impl From<Sm2Result> for CardSchedule {
    fn from(result: Sm2Result) -> Self {
        Self {
            easiness_factor: result.easiness_factor,
            interval_days: result.interval_days,
            repetitions: result.repetitions,
            next_review_date: Some(result.next_review_date),
        }
    }
}

/// Round to two decimal places, half away from zero.
pub fn round_ease(ease: f64) -> f64 {
    (ease * 100.0).round() / 100.0
}

/// Calculate new SM-2 parameters after a review with default parameters.
///
/// `rating` must be an integer in `0..=5`; anything else is rejected with
/// [`SchedulerError::InvalidRating`](crate::SchedulerError::InvalidRating).
pub fn calculate_sm2(
    easiness_factor: f64,
    interval_days: u32,
    repetitions: u32,
    rating: i64,
    today: NaiveDate,
) -> Result<Sm2Result> {
    let rating = Quality::new(rating)?;
    Sm2::default().review(easiness_factor, interval_days, repetitions, rating, today)
}

/// Apply a review to a stored card with default parameters.
pub fn review_card(card: &CardSchedule, rating: Quality, today: NaiveDate) -> Result<SchedulingResult> {
    Sm2::default().schedule(card, rating, today)
}

impl Sm2 {
    /// New ease factor: adjusted by the quality deficit, floored, rounded.
    pub fn next_ease(&self, ease: f64, rating: Quality) -> f64 {
        let q = f64::from(rating.deficit());
        let mut ease = ease + (0.1 - q * (0.08 + q * 0.02));
        // A configured minimum can raise the floor but never lower it.
        let floor = self.minimum_ease.max(MIN_EASINESS_FACTOR);
        if ease < floor {
            ease = floor;
        }
        round_ease(ease)
    }

    /// New interval in days. `new_ease` is the already-updated ease factor.
    pub fn next_interval(&self, interval: u32, repetitions: u32, new_ease: f64, rating: Quality) -> u32 {
        if !rating.is_success() {
            return FAILED_INTERVAL;
        }
        match repetitions {
            0 => self.first_interval,
            1 => self.second_interval,
            // Float-to-int casts saturate, so huge intervals stop at u32::MAX.
            _ => (f64::from(interval) * new_ease).round() as u32,
        }
    }

    /// Full SM-2 update over raw state fields.
    pub fn review(
        &self,
        easiness_factor: f64,
        interval_days: u32,
        repetitions: u32,
        rating: Quality,
        today: NaiveDate,
    ) -> Result<Sm2Result> {
        let new_ease = self.next_ease(easiness_factor, rating);
        let new_interval = self.next_interval(interval_days, repetitions, new_ease, rating);
        let new_repetitions = if rating.is_success() {
            repetitions.saturating_add(1)
        } else {
            0
        };
        let next_review_date = add_days(today, new_interval)?;

        debug!(
            rating = rating.value(),
            ease_before = easiness_factor,
            ease_after = new_ease,
            interval_before = interval_days,
            interval_after = new_interval,
            repetitions = new_repetitions,
            next_review = %next_review_date,
            "sm2 review scheduled"
        );

        Ok(Sm2Result {
            easiness_factor: new_ease,
            interval_days: new_interval,
            repetitions: new_repetitions,
            next_review_date,
        })
    }
}

impl SpacedRepetitionAlgorithm for Sm2 {
    fn name(&self) -> &'static str {
        "sm2"
    }

    fn initial_state(&self) -> CardSchedule {
        CardSchedule {
            easiness_factor: self.initial_ease,
            interval_days: 0,
            repetitions: 0,
            next_review_date: None,
        }
    }

    fn schedule(
        &self,
        state: &CardSchedule,
        rating: Quality,
        today: NaiveDate,
    ) -> Result<SchedulingResult> {
        let result = self.review(
            state.easiness_factor,
            state.interval_days,
            state.repetitions,
            rating,
            today,
        )?;
        let next_due = result.next_review_date;

        Ok(SchedulingResult {
            new_state: result.into(),
            next_due,
        })
    }
}
