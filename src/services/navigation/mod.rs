//! Week navigation: pure date arithmetic over Monday-anchored weeks.
//!
//! Every operation returns `None` instead of panicking when the resulting
//! week would leave chrono's representable date range.

use chrono::{Days, Duration, Local, NaiveDate};

use crate::models::week::{WeekSpan, DAYS_PER_WEEK};
use crate::utils::date;

pub use crate::utils::date::monday_of;

/// The Monday-anchored week containing `anchor`.
pub fn compute_week(anchor: NaiveDate) -> Option<WeekSpan> {
    let monday = date::monday_of(anchor)?;
    let mut days = [monday; DAYS_PER_WEEK];
    for (offset, day) in days.iter_mut().enumerate() {
        *day = monday.checked_add_days(Days::new(offset as u64))?;
    }
    Some(WeekSpan { anchor, days })
}

/// Move the whole span by `delta_weeks` (negative goes back in time).
pub fn shift_week(span: &WeekSpan, delta_weeks: i64) -> Option<WeekSpan> {
    let delta = Duration::try_weeks(delta_weeks)?;
    compute_week(span.anchor.checked_add_signed(delta)?)
}

/// Stateful pager over weeks for a week view header/footer.
///
/// Holds only the anchor date; every transition replaces the span. A
/// transition that would leave the date range returns `None` and keeps the
/// current anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekNavigator {
    anchor: NaiveDate,
}

impl WeekNavigator {
    pub fn new(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn current(&self) -> Option<WeekSpan> {
        compute_week(self.anchor)
    }

    pub fn previous_week(&mut self) -> Option<WeekSpan> {
        self.step(-1)
    }

    pub fn next_week(&mut self) -> Option<WeekSpan> {
        self.step(1)
    }

    pub fn jump_to(&mut self, date: NaiveDate) -> Option<WeekSpan> {
        let week = compute_week(date)?;
        self.anchor = date;
        Some(week)
    }

    pub fn jump_to_today(&mut self) -> Option<WeekSpan> {
        self.jump_to(Local::now().date_naive())
    }

    /// Header text for the current span.
    pub fn month_label(&self) -> Option<String> {
        self.current().map(|week| week.month_label())
    }

    fn step(&mut self, delta_weeks: i64) -> Option<WeekSpan> {
        let week = shift_week(&self.current()?, delta_weeks)?;
        self.anchor = week.anchor;
        Some(week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn week_of(y: i32, m: u32, d: u32) -> WeekSpan {
        compute_week(date(y, m, d)).unwrap()
    }

    #[test]
    fn test_compute_week_from_wednesday() {
        let week = week_of(2025, 10, 8);

        assert_eq!(week.anchor, date(2025, 10, 8));
        assert_eq!(week.first_day(), date(2025, 10, 6));
        assert_eq!(week.last_day(), date(2025, 10, 12));
        assert_eq!(week.first_day().weekday(), Weekday::Mon);
        assert_eq!(week.last_day().weekday(), Weekday::Sun);
    }

    #[test]
    fn test_compute_week_from_sunday_goes_back() {
        let week = week_of(2025, 10, 12);
        assert_eq!(week.first_day(), date(2025, 10, 6));
    }

    #[test]
    fn test_days_are_consecutive() {
        let week = week_of(2024, 2, 28);
        for pair in week.days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        assert!(week.contains(date(2024, 2, 29)));
    }

    #[test]
    fn test_shift_back_one_week() {
        let shifted = shift_week(&week_of(2025, 10, 8), -1);
        assert_eq!(shifted, Some(week_of(2025, 10, 1)));
    }

    #[test]
    fn test_shift_forward_several_weeks() {
        let shifted = shift_week(&week_of(2025, 12, 17), 3).unwrap();
        assert_eq!(shifted.first_day(), date(2026, 1, 5));
    }

    #[test]
    fn test_shift_past_date_range_is_none() {
        let week = week_of(2025, 10, 8);

        // Representable as a duration, but lands outside chrono's dates
        assert_eq!(shift_week(&week, 100_000_000), None);
        assert_eq!(shift_week(&week, -100_000_000), None);
        // Too large to be a duration at all
        assert_eq!(shift_week(&week, 9_999_999_999_999), None);
        assert_eq!(shift_week(&week, i64::MIN), None);
    }

    #[test]
    fn test_compute_week_at_range_edges_does_not_panic() {
        let (earliest, latest) = (NaiveDate::MIN, NaiveDate::MAX);

        assert_eq!(
            compute_week(earliest).is_some(),
            earliest.weekday() == Weekday::Mon
        );
        assert_eq!(
            compute_week(latest).is_some(),
            latest.weekday() == Weekday::Sun
        );
    }

    #[test]
    fn test_month_label_uses_monday() {
        // Mon 29 Sep .. Sun 5 Oct 2025, anchored in October
        assert_eq!(week_of(2025, 10, 3).month_label(), "September 2025");

        // Mon 29 Dec 2025 .. Sun 4 Jan 2026
        assert_eq!(week_of(2026, 1, 2).month_label(), "December 2025");
    }

    #[test]
    fn test_range_label() {
        assert_eq!(week_of(2025, 10, 3).range_label(), "Mon 29 Sep - Sun 5 Oct 2025");
    }

    #[test]
    fn test_navigator_round_trip() {
        let mut nav = WeekNavigator::new(date(2025, 10, 8));
        let start = nav.current();

        let prev = nav.previous_week().unwrap();
        assert_eq!(prev.first_day(), date(2025, 9, 29));
        let back = nav.next_week();
        assert_eq!(back, start);
    }

    #[test]
    fn test_navigator_stops_at_end_of_range() {
        let last = NaiveDate::MAX;
        let mut nav = WeekNavigator::new(last - Duration::days(14));

        let mut steps = 0;
        while nav.next_week().is_some() {
            steps += 1;
            assert!(steps < 4);
        }
        let anchor = nav.anchor();
        assert_eq!(nav.next_week(), None);
        assert_eq!(nav.anchor(), anchor);
    }

    #[test]
    fn test_navigator_jump() {
        let mut nav = WeekNavigator::new(date(2025, 10, 8));
        let week = nav.jump_to(date(2025, 1, 1)).unwrap();
        assert_eq!(week.first_day(), date(2024, 12, 30));
        assert_eq!(nav.month_label().as_deref(), Some("December 2024"));
    }

    #[test]
    fn test_jump_to_today_contains_today() {
        let mut nav = WeekNavigator::new(date(2000, 1, 1));
        let week = nav.jump_to_today().unwrap();
        assert!(week.contains(Local::now().date_naive()));
    }
}
