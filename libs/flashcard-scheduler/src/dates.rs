//! Calendar-date helpers.
//!
//! Scheduling works at day granularity, so everything here is a
//! `NaiveDate`; times and timezones never enter the arithmetic.

use chrono::{Days, Duration, Local, NaiveDate, Timelike};
use tracing::warn;

use crate::error::{Result, SchedulerError};

/// Storage format for review dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Get adjusted "today" based on daily_reset_hour.
///
/// If the current hour is before the reset hour, "today" is actually "yesterday"
/// from a study perspective, so late-night reviews count towards the previous day.
///
/// # Arguments
/// * `daily_reset_hour` - Hour of day (0-23) when a new study day begins
pub fn adjusted_today(daily_reset_hour: u32) -> NaiveDate {
    let now = Local::now();

    if now.hour() < daily_reset_hour {
        (now - Duration::days(1)).date_naive()
    } else {
        now.date_naive()
    }
}

/// Add whole days to a date, rolling over months and years.
pub fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or(SchedulerError::DateOutOfRange { date, days })
}

/// Format as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| {
        warn!(value, "rejected malformed date");
        SchedulerError::InvalidDate {
            value: value.to_string(),
        }
    })
}
