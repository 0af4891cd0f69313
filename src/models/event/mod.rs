// Event module
// Timed calendar entry as consumed by the week layout engine

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A time-interval event for one person.
///
/// All instants live in a single reference frame; the layout engine never
/// converts between time zones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub notes: String,
}

impl CalendarEvent {
    /// Create a new event, rejecting zero or negative durations
    ///
    /// # Examples
    /// ```
    /// use week_grid::models::event::CalendarEvent;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 10, 6).unwrap();
    /// let start = day.and_hms_opt(9, 0, 0).unwrap();
    /// let end = day.and_hms_opt(10, 0, 0).unwrap();
    /// let event = CalendarEvent::new(start, end, "Physio").unwrap();
    /// assert_eq!(event.day(), day);
    /// ```
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        notes: impl Into<String>,
    ) -> Result<Self, String> {
        let event = Self {
            start,
            end,
            notes: notes.into(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events field by field
    pub fn builder() -> CalendarEventBuilder {
        CalendarEventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }
        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// The calendar date the event is attributed to (the day of its start).
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Half-open interval intersection. Events that only touch at an
    /// endpoint do not overlap.
    pub fn overlaps(&self, other: &CalendarEvent) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True if the event intersects `[from, to)`.
    pub fn intersects(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        self.start < to && from < self.end
    }
}

/// Loosely-typed event as received from a JSON payload, where either
/// boundary may be missing.
///
/// Times may be naive ISO 8601 or RFC 3339 with an offset; see
/// [`parse_instant`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, deserialize_with = "deserialize_instant")]
    pub start: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_instant")]
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub notes: String,
}

/// Parse an instant as naive ISO 8601 (`2025-10-06T09:00:00`) or as
/// RFC 3339 with an offset (`2025-10-06T09:00:00Z`, `...+02:00`).
///
/// Offset instants keep their wall-clock time; the offset is discarded, not
/// applied, since the engine works in a single reference frame.
pub fn parse_instant(text: &str) -> Result<NaiveDateTime, String> {
    if let Ok(naive) = text.parse::<NaiveDateTime>() {
        return Ok(naive);
    }
    DateTime::parse_from_rfc3339(text)
        .map(|instant| instant.naive_local())
        .map_err(|e| format!("Invalid date-time {text:?}: {e}"))
}

fn deserialize_instant<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(text) => parse_instant(&text)
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

impl TryFrom<EventRecord> for CalendarEvent {
    type Error = String;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let start = record.start.ok_or("Event start time is required")?;
        let end = record.end.ok_or("Event end time is required")?;
        CalendarEvent::new(start, end, record.notes)
    }
}

impl From<&CalendarEvent> for EventRecord {
    fn from(event: &CalendarEvent) -> Self {
        Self {
            start: Some(event.start),
            end: Some(event.end),
            notes: event.notes.clone(),
        }
    }
}

/// Builder for creating events
#[derive(Debug, Default)]
pub struct CalendarEventBuilder {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    notes: String,
}

impl CalendarEventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start time
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the end time relative to the start
    pub fn duration(mut self, duration: Duration) -> Self {
        if let Some(start) = self.start {
            self.end = Some(start + duration);
        }
        self
    }

    /// Set the notes shown in the grid
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent, String> {
        CalendarEvent::try_from(EventRecord {
            start: self.start,
            end: self.end,
            notes: self.notes,
        })
    }
}
