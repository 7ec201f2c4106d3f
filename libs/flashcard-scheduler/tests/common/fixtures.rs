//! Fixture constructors and input grids.

use chrono::NaiveDate;

use flashcard_scheduler::CardSchedule;

/// Ease factors spanning the floor up to well above the default.
pub static EASE_GRID: [f64; 8] = [1.3, 1.31, 1.5, 1.96, 2.18, 2.5, 2.6, 3.4];

/// Intervals from a brand-new card to multi-year gaps.
pub static INTERVAL_GRID: [u32; 7] = [0, 1, 6, 15, 38, 365, 2000];

/// Repetition counts covering both fixed-interval steps and growth.
pub static REPETITION_GRID: [u32; 6] = [0, 1, 2, 3, 10, 50];

/// Every combination of the three grids.
pub fn state_grid() -> impl Iterator<Item = (f64, u32, u32)> {
    EASE_GRID.iter().flat_map(|&ease| {
        INTERVAL_GRID.iter().flat_map(move |&interval| {
            REPETITION_GRID
                .iter()
                .map(move |&repetitions| (ease, interval, repetitions))
        })
    })
}

/// A card that has been reviewed before.
pub fn reviewed_card(
    easiness_factor: f64,
    interval_days: u32,
    repetitions: u32,
    next_review_date: NaiveDate,
) -> CardSchedule {
    CardSchedule {
        easiness_factor,
        interval_days,
        repetitions,
        next_review_date: Some(next_review_date),
    }
}
