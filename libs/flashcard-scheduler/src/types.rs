//! Core types for the scheduler.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::due;
use crate::rating::Quality;

/// Ease factor assigned to cards that have never been reviewed.
pub const DEFAULT_EASINESS_FACTOR: f64 = 2.5;

/// Floor for the ease factor.
pub const MIN_EASINESS_FACTOR: f64 = 1.3;

/// Consecutive successes after which a card counts as mastered.
pub const MASTERED_REPETITIONS: u32 = 3;

/// Card learning status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStatus {
    New,
    Learning,
    Mastered,
}

/// Scheduling state stored alongside each flashcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSchedule {
    pub easiness_factor: f64,
    pub interval_days: u32,
    pub repetitions: u32,
    pub next_review_date: Option<NaiveDate>,
}

impl Default for CardSchedule {
    fn default() -> Self {
        Self {
            easiness_factor: DEFAULT_EASINESS_FACTOR,
            interval_days: 0,
            repetitions: 0,
            next_review_date: None,
        }
    }
}

impl CardSchedule {
    /// Build from stored columns, filling nulls with new-card defaults.
    pub fn from_stored(
        easiness_factor: Option<f64>,
        interval_days: Option<u32>,
        repetitions: Option<u32>,
        next_review_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            easiness_factor: easiness_factor.unwrap_or(DEFAULT_EASINESS_FACTOR),
            interval_days: interval_days.unwrap_or(0),
            repetitions: repetitions.unwrap_or(0),
            next_review_date,
        }
    }

    pub fn is_due(&self, today: NaiveDate) -> bool {
        due::is_due(self.next_review_date, today)
    }

    pub fn status(&self) -> CardStatus {
        if self.next_review_date.is_none() {
            CardStatus::New
        } else if self.repetitions < MASTERED_REPETITIONS {
            CardStatus::Learning
        } else {
            CardStatus::Mastered
        }
    }
}

/// Algorithm options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    #[default]
    Sm2,
}

impl Algorithm {
    /// Get the algorithm name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sm2 => "sm2",
        }
    }

    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sm2" => Some(Self::Sm2),
            _ => None,
        }
    }
}

/// Record of a single applied review, ready to be appended to a review log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewLog {
    pub rating: Quality,
    pub reviewed_on: NaiveDate,
    pub ease_before: f64,
    pub ease_after: f64,
    pub interval_before: u32,
    pub interval_after: u32,
    pub repetitions_before: u32,
    pub repetitions_after: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_answer_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ReviewLog {
    pub fn new(
        before: &CardSchedule,
        after: &CardSchedule,
        rating: Quality,
        reviewed_on: NaiveDate,
    ) -> Self {
        Self {
            rating,
            reviewed_on,
            ease_before: before.easiness_factor,
            ease_after: after.easiness_factor,
            interval_before: before.interval_days,
            interval_after: after.interval_days,
            repetitions_before: before.repetitions,
            repetitions_after: after.repetitions,
            time_to_answer_ms: None,
            session_id: None,
        }
    }

    pub fn with_time_to_answer(mut self, millis: u64) -> Self {
        self.time_to_answer_ms = Some(millis);
        self
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Whether this review broke a success streak.
    pub fn is_lapse(&self) -> bool {
        !self.rating.is_success() && self.repetitions_before > 0
    }
}
