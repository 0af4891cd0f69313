//! Validation of incoming events before any clustering happens.
//!
//! Valid events are collected into an arena addressed by position; every
//! later stage refers to events by that position rather than by reference.

use super::LayoutError;
use crate::models::event::{CalendarEvent, EventRecord};
use crate::models::layout::DroppedEvent;
use crate::models::settings::ValidationMode;

/// An event admitted to the layout. Only constructible through validation,
/// so every arena entry has a strictly positive duration.
#[derive(Debug, Clone, Copy)]
pub struct ArenaEvent<'a> {
    index: usize,
    event: &'a CalendarEvent,
}

impl<'a> ArenaEvent<'a> {
    pub fn new(index: usize, event: &'a CalendarEvent) -> Result<Self, LayoutError> {
        if event.end <= event.start {
            return Err(LayoutError::InvalidEvent {
                index,
                start: event.start,
                end: event.end,
                notes: event.notes.clone(),
            });
        }
        Ok(Self { index, event })
    }

    /// Index of the event in the caller's input.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn event(&self) -> &'a CalendarEvent {
        self.event
    }
}

pub struct Ingested<'a> {
    pub arena: Vec<ArenaEvent<'a>>,
    pub dropped: Vec<DroppedEvent>,
}

/// Admit `events`, keeping each one's position in the slice as its index.
pub fn ingest(events: &[CalendarEvent], mode: ValidationMode) -> Result<Ingested<'_>, LayoutError> {
    let mut dropped = Vec::new();
    let arena = admit(events.iter().enumerate(), mode, &mut dropped)?;
    Ok(Ingested { arena, dropped })
}

/// Resolve loosely-typed records into events. Records missing a boundary
/// fail in strict mode and are dropped in lenient mode. The returned pairs
/// keep each record's original index.
pub fn resolve_records(
    records: &[EventRecord],
    mode: ValidationMode,
    dropped: &mut Vec<DroppedEvent>,
) -> Result<Vec<(usize, CalendarEvent)>, LayoutError> {
    let mut resolved = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let missing = match (record.start, record.end) {
            (Some(start), Some(end)) => {
                resolved.push((
                    index,
                    CalendarEvent {
                        start,
                        end,
                        notes: record.notes.clone(),
                    },
                ));
                continue;
            }
            (None, _) => "start",
            (Some(_), None) => "end",
        };
        let err = LayoutError::MissingTime {
            index,
            field: missing,
        };
        match mode {
            ValidationMode::Strict => return Err(err),
            ValidationMode::Lenient => dropped.push(DroppedEvent {
                index,
                reason: err.to_string(),
            }),
        }
    }
    Ok(resolved)
}

pub fn admit<'a>(
    entries: impl IntoIterator<Item = (usize, &'a CalendarEvent)>,
    mode: ValidationMode,
    dropped: &mut Vec<DroppedEvent>,
) -> Result<Vec<ArenaEvent<'a>>, LayoutError> {
    let mut arena = Vec::new();
    for (index, event) in entries {
        match ArenaEvent::new(index, event) {
            Ok(entry) => arena.push(entry),
            Err(err) => match mode {
                ValidationMode::Strict => return Err(err),
                ValidationMode::Lenient => dropped.push(DroppedEvent {
                    index,
                    reason: err.to_string(),
                }),
            },
        }
    }
    dropped.sort_by_key(|d| d.index);
    Ok(arena)
}
