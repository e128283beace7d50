// Test fixtures - reusable test data
// Provides consistent grid setup and events across the integration tests

use booking_grid::utils::date::day_at_hour;
use booking_grid::{CalendarConfig, CalendarEvent, ViewportRect};
use chrono::NaiveDate;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Oct 16 2023 - start of the reference week
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 16).unwrap()
    }

    /// Wednesday of the reference week
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 10, 18).unwrap()
    }
}

/// 07:00-22:00 business hours, 48px cells
pub fn business_hours_config() -> CalendarConfig {
    CalendarConfig::builder()
        .time_range(7, 22)
        .cell_height(48.0)
        .build()
        .unwrap()
}

/// A viewport covering the full 7x15-cell grid, so seven 100px columns
/// and no scrolling
pub fn full_grid_viewport() -> ViewportRect {
    ViewportRect::new(0.0, 0.0, 700.0, 720.0, 0.0)
}

/// An event running whole hours on the given day
pub fn event_on(date: NaiveDate, from_hour: u32, to_hour: u32) -> CalendarEvent {
    CalendarEvent::new(
        "owner-1",
        "Event",
        day_at_hour(date, from_hour),
        day_at_hour(date, to_hour),
    )
    .unwrap()
}
