// Week module
// Monday-anchored seven day window

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DAYS_PER_WEEK: usize = 7;

/// A Monday-anchored sequence of seven consecutive dates.
///
/// `anchor` is the date navigation was computed from; `days[0]` is the
/// Monday on or before it and `days[6]` the following Sunday. Built by
/// `services::navigation::compute_week`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekSpan {
    pub anchor: NaiveDate,
    pub days: [NaiveDate; DAYS_PER_WEEK],
}

impl WeekSpan {
    pub fn first_day(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days[DAYS_PER_WEEK - 1]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.first_day() && date <= self.last_day()
    }

    /// Position of `date` within the week, Monday = 0.
    pub fn day_index(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|d| *d == date)
    }

    /// Month/year header, taken from the Monday so that a week straddling
    /// a month or year boundary is labeled by its first day.
    pub fn month_label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    /// e.g. "Mon 29 Sep - Sun 5 Oct 2025"
    pub fn range_label(&self) -> String {
        format!(
            "{} - {}",
            self.first_day().format("%a %-d %b"),
            self.last_day().format("%a %-d %b %Y")
        )
    }
}
