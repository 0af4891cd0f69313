// Test fixtures - reusable test data
// Provides consistent events and dates across the integration tests

#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use week_grid::models::event::CalendarEvent;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Oct 6, 2025
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 6).unwrap()
    }

    /// Wednesday, Oct 8, 2025
    pub fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 8).unwrap()
    }

    /// Sunday, Oct 12, 2025
    pub fn sunday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 12).unwrap()
    }

    /// `day_offset` days after the sample Monday at `hour:minute`
    pub fn at(day_offset: i64, hour: u32, minute: u32) -> NaiveDateTime {
        (monday() + Duration::days(day_offset))
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// Event on the sample Monday between two "H:MM" times
    pub fn monday(start: (u32, u32), end: (u32, u32), notes: &str) -> CalendarEvent {
        on_day(0, start, end, notes)
    }

    pub fn on_day(day_offset: i64, start: (u32, u32), end: (u32, u32), notes: &str) -> CalendarEvent {
        CalendarEvent::new(
            dates::at(day_offset, start.0, start.1),
            dates::at(day_offset, end.0, end.1),
            notes,
        )
        .unwrap()
    }

    /// A realistic busy Monday for a care worker
    pub fn busy_monday() -> Vec<CalendarEvent> {
        vec![
            monday((8, 0), (9, 0), "Morning visit"),
            monday((8, 30), (10, 0), "Medication round"),
            monday((9, 30), (11, 0), "Physio"),
            monday((10, 0), (10, 30), "Call family"),
            monday((13, 0), (14, 0), "Lunch support"),
            monday((13, 0), (14, 0), "Lunch support (second carer)"),
            monday((16, 0), (17, 0), "Review"),
        ]
    }
}
