//! Fixed discretization of a calendar day into equal slots starting at 00:00.
//!
//! The default grid uses 30-minute slots, giving 48 rows labeled
//! `"0:00"`, `"0:30"`, ... `"23:30"`.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::LayoutError;
use crate::models::settings::{is_valid_slot_length, DEFAULT_SLOT_MINUTES, MINUTES_PER_DAY};
use crate::utils::date::start_of_day;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    slot_minutes: u32,
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            slot_minutes: DEFAULT_SLOT_MINUTES,
        }
    }
}

impl SlotGrid {
    pub fn new(slot_minutes: u32) -> Result<Self, LayoutError> {
        if !is_valid_slot_length(slot_minutes) {
            return Err(LayoutError::InvalidSlotLength(slot_minutes));
        }
        Ok(Self { slot_minutes })
    }

    pub fn slot_minutes(&self) -> u32 {
        self.slot_minutes
    }

    pub fn slots_per_day(&self) -> usize {
        (MINUTES_PER_DAY / self.slot_minutes) as usize
    }

    /// Slot containing `time`, truncating to the slot floor. A time exactly
    /// on a boundary belongs to the slot that starts there.
    pub fn slot_index_of(&self, time: NaiveTime) -> usize {
        let minutes = time.hour() * 60 + time.minute();
        (minutes / self.slot_minutes) as usize
    }

    /// "H:MM" label of the slot's start time.
    pub fn slot_label(&self, index: usize) -> String {
        let minutes = index as u32 * self.slot_minutes;
        format!("{}:{:02}", minutes / 60, minutes % 60)
    }

    /// Half-open `[start, end)` range the slot covers on `date`. The last
    /// slot ends at the following midnight.
    pub fn slot_range(&self, date: NaiveDate, index: usize) -> (NaiveDateTime, NaiveDateTime) {
        let minutes = i64::from(self.slot_minutes);
        let start = start_of_day(date) + Duration::minutes(minutes * index as i64);
        (start, start + Duration::minutes(minutes))
    }
}

/// Slot index on the default half-hour grid: `hour * 2 + (minute >= 30)`.
pub fn slot_index_of(time: NaiveTime) -> usize {
    SlotGrid::default().slot_index_of(time)
}

/// Label on the default half-hour grid.
pub fn slot_label(index: usize) -> String {
    SlotGrid::default().slot_label(index)
}
