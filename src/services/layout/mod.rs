//! Weekly calendar layout engine.
//!
//! Raw events flow through four pure stages per day:
//! ingestion (validation into an index arena), overlap clustering, lane
//! assignment and slot-cell materialization. Nothing here performs I/O or
//! keeps state between calls; running the same inputs twice gives identical
//! output.

mod error;
pub mod ingest;
pub mod lanes;
pub mod materialize;
pub mod overlap;
pub mod time_slot;

pub use error::LayoutError;
pub use time_slot::{slot_index_of, slot_label, SlotGrid};

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::event::{CalendarEvent, EventRecord};
use crate::models::layout::{DayLayout, DroppedEvent, WeekLayout};
use crate::models::settings::LayoutSettings;
use crate::models::week::WeekSpan;
use ingest::ArenaEvent;
use materialize::ClusterLayout;

/// Lay out `events` over the seven days of `week`.
///
/// Events are attributed to the day containing their start; events whose
/// day is outside the week are ignored. Invalid events fail the call in
/// strict mode and are listed in `WeekLayout::dropped` in lenient mode.
pub fn layout_week(
    events: &[CalendarEvent],
    week: &WeekSpan,
    settings: &LayoutSettings,
) -> Result<WeekLayout, LayoutError> {
    let grid = SlotGrid::new(settings.slot_minutes)?;
    let ingested = ingest::ingest(events, settings.validation)?;
    Ok(build_week(&ingested.arena, week, &grid, ingested.dropped))
}

/// Like [`layout_week`], for records that may lack a start or end.
pub fn layout_records(
    records: &[EventRecord],
    week: &WeekSpan,
    settings: &LayoutSettings,
) -> Result<WeekLayout, LayoutError> {
    let grid = SlotGrid::new(settings.slot_minutes)?;
    let mut dropped = Vec::new();
    let resolved = ingest::resolve_records(records, settings.validation, &mut dropped)?;
    let arena = ingest::admit(
        resolved.iter().map(|(index, event)| (*index, event)),
        settings.validation,
        &mut dropped,
    )?;
    Ok(build_week(&arena, week, &grid, dropped))
}

/// Lay out a single day from the arena positions attributed to it.
pub fn layout_day(
    arena: &[ArenaEvent<'_>],
    ids: &[usize],
    date: NaiveDate,
    grid: &SlotGrid,
) -> DayLayout {
    let clusters: Vec<ClusterLayout> = overlap::resolve_clusters(arena, ids)
        .into_iter()
        .map(|cluster| {
            let lanes = lanes::assign_lanes(arena, &cluster);
            ClusterLayout { cluster, lanes }
        })
        .collect();

    DayLayout {
        date,
        slots: materialize::materialize_day(arena, date, grid, &clusters),
        placements: materialize::placements(arena, &clusters),
    }
}

fn build_week(
    arena: &[ArenaEvent<'_>],
    week: &WeekSpan,
    grid: &SlotGrid,
    dropped: Vec<DroppedEvent>,
) -> WeekLayout {
    let mut by_day: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
    for (id, entry) in arena.iter().enumerate() {
        let day = entry.event().day();
        if week.contains(day) {
            by_day.entry(day).or_default().push(id);
        }
    }

    let days = week
        .days
        .iter()
        .map(|date| {
            let ids = by_day.get(date).map(Vec::as_slice).unwrap_or(&[]);
            layout_day(arena, ids, *date, grid)
        })
        .collect();

    WeekLayout {
        week: *week,
        days,
        dropped,
    }
}

/// Settings-bound entry point used by applications.
///
/// Wraps the pure engine and reports what happened through `log`.
#[derive(Debug, Clone, Default)]
pub struct LayoutService {
    settings: LayoutSettings,
}

impl LayoutService {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn layout(&self, events: &[CalendarEvent], week: &WeekSpan) -> Result<WeekLayout, LayoutError> {
        let layout = layout_week(events, week, &self.settings)?;
        self.report(events.len(), &layout);
        Ok(layout)
    }

    pub fn layout_records(
        &self,
        records: &[EventRecord],
        week: &WeekSpan,
    ) -> Result<WeekLayout, LayoutError> {
        let layout = layout_records(records, week, &self.settings)?;
        self.report(records.len(), &layout);
        Ok(layout)
    }

    fn report(&self, received: usize, layout: &WeekLayout) {
        for dropped in &layout.dropped {
            log::warn!("Dropped event #{}: {}", dropped.index, dropped.reason);
        }
        let placed: usize = layout.days.iter().map(|d| d.placements.len()).sum();
        log::debug!(
            "Laid out week of {}: {} of {} events placed, {} dropped, {}-minute slots",
            layout.week.first_day(),
            placed,
            received,
            layout.dropped.len(),
            self.settings.slot_minutes
        );
    }
}
