//! Greedy interval partitioning of a cluster into lanes.
//!
//! Events are taken in sweep order and each one goes into the lowest lane
//! whose current occupant has already ended; a new lane opens only when all
//! existing lanes are busy. The lane count therefore equals the peak number
//! of simultaneously running events in the cluster.

use chrono::NaiveDateTime;

use super::ingest::ArenaEvent;
use super::overlap::OverlapCluster;

/// Lane per cluster member, aligned with `OverlapCluster::members`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneAssignment {
    pub lanes: Vec<usize>,
    /// Number of lanes the cluster needs; shared by every member.
    pub width: usize,
}

impl LaneAssignment {
    /// Pairs of (arena position, lane).
    pub fn iter<'c>(&'c self, cluster: &'c OverlapCluster) -> impl Iterator<Item = (usize, usize)> + 'c {
        cluster.members.iter().copied().zip(self.lanes.iter().copied())
    }
}

/// Assign lanes to a cluster whose members are in sweep order.
pub fn assign_lanes(arena: &[ArenaEvent<'_>], cluster: &OverlapCluster) -> LaneAssignment {
    // End instant of the event currently holding each lane
    let mut lane_ends: Vec<NaiveDateTime> = Vec::new();
    let mut lanes = Vec::with_capacity(cluster.members.len());

    for &id in &cluster.members {
        let event = arena[id].event();
        match lane_ends.iter().position(|&end| end <= event.start) {
            Some(lane) => {
                lane_ends[lane] = event.end;
                lanes.push(lane);
            }
            None => {
                lane_ends.push(event.end);
                lanes.push(lane_ends.len() - 1);
            }
        }
    }

    LaneAssignment {
        lanes,
        width: lane_ends.len().max(1),
    }
}
