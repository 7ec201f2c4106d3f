//! Review ratings.
//!
//! The scheduler works on the classic six-point SM-2 quality scale (0-5).
//! Learners only see four choices; each maps onto one point of that scale.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, SchedulerError};

/// Recall quality on the six-point SM-2 scale.
///
/// | value | meaning |
/// |---|---|
/// | 0 | complete blackout |
/// | 1 | incorrect, answer seemed familiar |
/// | 2 | incorrect, answer easy to recall once shown |
/// | 3 | correct with serious difficulty |
/// | 4 | correct with some hesitation |
/// | 5 | perfect response |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Quality(u8);

impl Quality {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 5;
    /// Lowest quality still counted as a successful recall.
    pub const PASSING: u8 = 3;

    /// Every point of the scale, lowest first.
    pub const ALL: [Quality; 6] = [
        Quality(0),
        Quality(1),
        Quality(2),
        Quality(3),
        Quality(4),
        Quality(5),
    ];

    /// Validate a raw rating. Out-of-range values are rejected, never clamped.
    pub fn new(value: i64) -> Result<Self> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            warn!(rating = value, "rejected out-of-range rating");
            Err(SchedulerError::InvalidRating {
                value: value.to_string(),
            })
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Distance from a perfect response (`5 - quality`).
    pub fn deficit(self) -> u8 {
        Self::MAX - self.0
    }

    pub fn is_success(self) -> bool {
        self.0 >= Self::PASSING
    }

    /// Label for the full six-point scale.
    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Blackout",
            1 => "Wrong",
            2 => "Hard",
            3 => "Difficult",
            4 => "Good",
            _ => "Easy",
        }
    }
}

impl TryFrom<i64> for Quality {
    type Error = SchedulerError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Quality {
    type Error = SchedulerError;

    /// Accepts only integral values, so `4.0` passes and `2.5` is rejected.
    fn try_from(value: f64) -> Result<Self> {
        let in_range = (f64::from(Self::MIN)..=f64::from(Self::MAX)).contains(&value);
        if in_range && value.fract() == 0.0 {
            Ok(Self(value as u8))
        } else {
            warn!(rating = value, "rejected rating outside the integer scale");
            Err(SchedulerError::InvalidRating {
                value: value.to_string(),
            })
        }
    }
}

impl From<Quality> for u8 {
    fn from(quality: Quality) -> Self {
        quality.0
    }
}

/// The four choices shown to a learner after revealing an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingChoice {
    Again,
    Hard,
    Good,
    Easy,
}

impl RatingChoice {
    /// Underlying six-point quality.
    pub fn quality(self) -> Quality {
        match self {
            Self::Again => Quality(1),
            Self::Hard => Quality(3),
            Self::Good => Quality(4),
            Self::Easy => Quality(5),
        }
    }

    /// Reverse mapping; qualities 0 and 2 have no exposed choice.
    pub fn from_quality(quality: Quality) -> Option<Self> {
        match quality.value() {
            1 => Some(Self::Again),
            3 => Some(Self::Hard),
            4 => Some(Self::Good),
            5 => Some(Self::Easy),
            _ => None,
        }
    }

    /// Keyboard shortcut digit (1-4).
    pub fn shortcut(self) -> u8 {
        match self {
            Self::Again => 1,
            Self::Hard => 2,
            Self::Good => 3,
            Self::Easy => 4,
        }
    }

    pub fn option(self) -> &'static RatingOption {
        &RATING_OPTIONS[self.shortcut() as usize - 1]
    }
}

/// Visual tone hint for a rating button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingTone {
    Destructive,
    Warning,
    Default,
    Success,
}

/// One entry of the rating options table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RatingOption {
    pub choice: RatingChoice,
    pub rating: Quality,
    pub label: &'static str,
    pub description: &'static str,
    pub tone: RatingTone,
}

/// Rating buttons in display order. Shortcut digit `n` selects entry `n - 1`.
pub static RATING_OPTIONS: [RatingOption; 4] = [
    RatingOption {
        choice: RatingChoice::Again,
        rating: Quality(1),
        label: "Again",
        description: "Forgot completely",
        tone: RatingTone::Destructive,
    },
    RatingOption {
        choice: RatingChoice::Hard,
        rating: Quality(3),
        label: "Hard",
        description: "Remembered with difficulty",
        tone: RatingTone::Warning,
    },
    RatingOption {
        choice: RatingChoice::Good,
        rating: Quality(4),
        label: "Good",
        description: "Remembered correctly",
        tone: RatingTone::Default,
    },
    RatingOption {
        choice: RatingChoice::Easy,
        rating: Quality(5),
        label: "Easy",
        description: "Remembered instantly",
        tone: RatingTone::Success,
    },
];

/// Resolve a keyboard shortcut digit (1-indexed) to its rating option.
pub fn option_for_shortcut(digit: u8) -> Option<&'static RatingOption> {
    let index = (digit as usize).checked_sub(1)?;
    RATING_OPTIONS.get(index)
}
