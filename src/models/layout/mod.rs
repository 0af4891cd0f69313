// Layout module
// Render-ready week grid produced by the layout engine

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::week::WeekSpan;

/// Result of laying out one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekLayout {
    pub week: WeekSpan,
    /// Always seven entries, Monday first
    pub days: Vec<DayLayout>,
    /// Events skipped in lenient mode
    pub dropped: Vec<DroppedEvent>,
}

impl WeekLayout {
    pub fn day(&self, date: NaiveDate) -> Option<&DayLayout> {
        self.days.iter().find(|day| day.date == date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub slots: Vec<SlotRow>,
    /// Lane assignment for every event attributed to this day, in
    /// cluster order
    pub placements: Vec<Placement>,
}

impl DayLayout {
    pub fn placement_of(&self, event: usize) -> Option<&Placement> {
        self.placements.iter().find(|p| p.event == event)
    }

    pub fn cluster_count(&self) -> usize {
        self.placements
            .iter()
            .map(|p| p.cluster + 1)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRow {
    /// "H:MM", e.g. "9:30"
    pub label: String,
    pub cells: Vec<Cell>,
}

impl SlotRow {
    pub fn is_empty(&self) -> bool {
        matches!(self.cells.as_slice(), [Cell::Absent])
    }

    /// Cells that take part in a lane layout (fragments and fillers).
    pub fn occupied_width(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| !matches!(cell, Cell::Absent))
            .count()
    }

    pub fn fragments(&self) -> impl Iterator<Item = &EventFragment> {
        self.cells.iter().filter_map(|cell| match cell {
            Cell::Event(fragment) => Some(fragment),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Cell {
    Event(EventFragment),
    /// Unused lane inside a cluster's width
    Filler { lane: usize, cluster_width: usize },
    /// Slot with no events at all
    Absent,
}

/// The part of one event that falls into one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFragment {
    /// Index of the event in the slice passed to the engine
    pub event: usize,
    pub notes: String,
    pub lane: usize,
    pub cluster_width: usize,
    /// The event started in an earlier slot
    pub continued: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub event: usize,
    pub lane: usize,
    /// Cluster index within the day
    pub cluster: usize,
    pub cluster_width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedEvent {
    pub index: usize,
    pub reason: String,
}
