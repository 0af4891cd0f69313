//! Partitioning of one day's events into overlap clusters.
//!
//! A cluster is a connected component of the overlap graph: two events share
//! a cluster if a chain of pairwise overlaps connects them, even when the two
//! ends of the chain never overlap directly.

use std::cmp::Ordering;

use super::ingest::ArenaEvent;

/// Events of one cluster, as arena positions in sweep order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlapCluster {
    pub members: Vec<usize>,
}

/// Ascending start, then ascending end, then input order.
pub fn sweep_cmp(a: &ArenaEvent<'_>, b: &ArenaEvent<'_>) -> Ordering {
    let (ea, eb) = (a.event(), b.event());
    ea.start
        .cmp(&eb.start)
        .then(ea.end.cmp(&eb.end))
        .then(a.index().cmp(&b.index()))
}

/// Sort arena positions `ids` into sweep order.
pub fn sweep_order(arena: &[ArenaEvent<'_>], ids: &[usize]) -> Vec<usize> {
    let mut order = ids.to_vec();
    order.sort_by(|&a, &b| sweep_cmp(&arena[a], &arena[b]));
    order
}

/// Compute the overlap clusters of the events at positions `ids`.
///
/// Sweeps events by start time, keeping the set of events still running at
/// the sweep point. Each new event is unioned with every member of that set.
/// Clusters come back ordered by their earliest event.
pub fn resolve_clusters(arena: &[ArenaEvent<'_>], ids: &[usize]) -> Vec<OverlapCluster> {
    let order = sweep_order(arena, ids);
    let mut sets = DisjointSet::new(order.len());
    let mut active: Vec<usize> = Vec::new();

    for (pos, &id) in order.iter().enumerate() {
        let start = arena[id].event().start;
        active.retain(|&a| arena[order[a]].event().end > start);
        for &a in &active {
            sets.union(a, pos);
        }
        active.push(pos);
    }

    let mut cluster_of_root: Vec<Option<usize>> = vec![None; order.len()];
    let mut clusters: Vec<OverlapCluster> = Vec::new();
    for (pos, &id) in order.iter().enumerate() {
        let root = sets.find(pos);
        let cluster = match cluster_of_root[root] {
            Some(cluster) => cluster,
            None => {
                clusters.push(OverlapCluster {
                    members: Vec::new(),
                });
                cluster_of_root[root] = Some(clusters.len() - 1);
                clusters.len() - 1
            }
        };
        clusters[cluster].members.push(id);
    }
    clusters
}

/// Union-find over `0..n` with path halving and union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
    }
}
