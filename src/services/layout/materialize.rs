//! Expansion of per-event lane assignments into a per-slot grid of cells.
//!
//! Every slot is an independent row; consecutive fragments of the same event
//! are not merged.

use chrono::NaiveDate;

use super::ingest::ArenaEvent;
use super::lanes::LaneAssignment;
use super::overlap::OverlapCluster;
use super::time_slot::SlotGrid;
use crate::models::layout::{Cell, EventFragment, Placement, SlotRow};

/// A cluster together with its lane assignment.
#[derive(Debug, Clone)]
pub struct ClusterLayout {
    pub cluster: OverlapCluster,
    pub lanes: LaneAssignment,
}

impl ClusterLayout {
    pub fn width(&self) -> usize {
        self.lanes.width
    }
}

/// Placement records for every member, clusters in order.
pub fn placements(arena: &[ArenaEvent<'_>], clusters: &[ClusterLayout]) -> Vec<Placement> {
    clusters
        .iter()
        .enumerate()
        .flat_map(|(cluster_index, layout)| {
            layout
                .lanes
                .iter(&layout.cluster)
                .map(move |(id, lane)| Placement {
                    event: arena[id].index(),
                    lane,
                    cluster: cluster_index,
                    cluster_width: layout.width(),
                })
        })
        .collect()
}

/// Build the slot rows of one day.
///
/// A slot touched by a cluster gets exactly `width` cells for that cluster,
/// one per lane: the event holding the lane in that slot, or a filler. When
/// several short events share a lane inside one slot the earliest one is
/// shown. Slots touched by no event hold a single `Cell::Absent`.
pub fn materialize_day(
    arena: &[ArenaEvent<'_>],
    date: NaiveDate,
    grid: &SlotGrid,
    clusters: &[ClusterLayout],
) -> Vec<SlotRow> {
    (0..grid.slots_per_day())
        .map(|slot| {
            let (from, to) = grid.slot_range(date, slot);
            let mut cells = Vec::new();

            for layout in clusters {
                let width = layout.width();
                let mut lane_cells: Vec<Option<Cell>> = vec![None; width];
                let mut touched = false;

                for (id, lane) in layout.lanes.iter(&layout.cluster) {
                    let entry = arena[id];
                    let event = entry.event();
                    if !event.intersects(from, to) {
                        continue;
                    }
                    touched = true;
                    if lane_cells[lane].is_none() {
                        lane_cells[lane] = Some(Cell::Event(EventFragment {
                            event: entry.index(),
                            notes: event.notes.clone(),
                            lane,
                            cluster_width: width,
                            continued: event.start < from,
                        }));
                    }
                }

                if touched {
                    cells.extend(lane_cells.into_iter().enumerate().map(|(lane, cell)| {
                        cell.unwrap_or(Cell::Filler {
                            lane,
                            cluster_width: width,
                        })
                    }));
                }
            }

            if cells.is_empty() {
                cells.push(Cell::Absent);
            }

            SlotRow {
                label: grid.slot_label(slot),
                cells,
            }
        })
        .collect()
}
