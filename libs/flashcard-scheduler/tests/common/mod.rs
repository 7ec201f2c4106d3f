//! Common test utilities for integration tests.
//!
//! This module provides:
//! - One-time tracing setup so scheduler logs show up with `RUST_LOG=debug`
//! - Fixed reference dates, so results never depend on the wall clock
//! - Fixture constructors for card states

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod fixtures;

use std::sync::Once;

use chrono::NaiveDate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

static TRACING: Once = Once::new();

/// Install a test-friendly subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::new(
                std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
            ))
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .try_init();
    });
}

/// Reference "today" used across tests.
pub fn today() -> NaiveDate {
    date(2024, 3, 10)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}
