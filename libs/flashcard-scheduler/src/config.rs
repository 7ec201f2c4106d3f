//! Scheduler settings.
//!
//! Settings arrive as JSON (the same shape the settings store persists);
//! every field is optional and falls back to the defaults below.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::algorithm::sm2::Sm2;
use crate::algorithm::SpacedRepetitionAlgorithm;
use crate::dates;
use crate::error::{Result, SchedulerError};
use crate::types::{Algorithm, MIN_EASINESS_FACTOR};

/// Scheduler configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub algorithm: Algorithm,
    /// Hour of day (0-23) when a new study day begins.
    pub daily_reset_hour: u32,
    pub sm2: Sm2,
}

impl SchedulerConfig {
    /// Parse and validate settings JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let problem = if self.daily_reset_hour > 23 {
            Some(format!(
                "daily_reset_hour must be 0-23, got {}",
                self.daily_reset_hour
            ))
        } else if self.sm2.minimum_ease.is_nan() || self.sm2.minimum_ease < MIN_EASINESS_FACTOR {
            Some(format!(
                "minimum_ease must be at least {MIN_EASINESS_FACTOR}, got {}",
                self.sm2.minimum_ease
            ))
        } else if self.sm2.initial_ease.is_nan() || self.sm2.initial_ease < self.sm2.minimum_ease {
            Some(format!(
                "initial_ease {} is below minimum_ease {}",
                self.sm2.initial_ease, self.sm2.minimum_ease
            ))
        } else if self.sm2.first_interval == 0 {
            Some("first_interval must be at least 1 day".to_string())
        } else if self.sm2.second_interval < self.sm2.first_interval {
            Some(format!(
                "second_interval {} is shorter than first_interval {}",
                self.sm2.second_interval, self.sm2.first_interval
            ))
        } else {
            None
        };

        match problem {
            Some(message) => {
                warn!(%message, "rejected scheduler configuration");
                Err(SchedulerError::InvalidConfig(message))
            }
            None => Ok(()),
        }
    }

    /// Build the configured algorithm.
    pub fn engine(&self) -> Box<dyn SpacedRepetitionAlgorithm> {
        match self.algorithm {
            Algorithm::Sm2 => Box::new(self.sm2.clone()),
        }
    }

    /// Current study day, honouring the reset hour.
    pub fn study_day(&self) -> NaiveDate {
        dates::adjusted_today(self.daily_reset_hour)
    }
}
