// Date utility functions

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// ISO weekday number, Monday = 1 ... Sunday = 7.
pub fn iso_weekday(date: NaiveDate) -> u32 {
    date.weekday().number_from_monday()
}

/// The Monday on or before `date`, or `None` when that Monday falls before
/// the earliest representable date.
pub fn monday_of(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(iso_weekday(date) - 1)))
}
