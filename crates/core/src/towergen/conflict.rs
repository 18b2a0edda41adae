//! Crossing rules that keep the tower from folding over itself.
//!
//! For a prospective edge `a`–`b` between adjacent levels three existing edges are forbidden:
//!
//! ```text
//! Diamond        ThroughFirst     ThroughSecond
//!  d   b           c                c
//!   \ /             \                \
//!    X               a                b
//!   / \             /                /
//!  a   c           b                a
//! ```
//!
//! `Diamond`: `c = (b.level, a.index)` joined to `d = (a.level, b.index)`.
//! `ThroughFirst`: `a` joined to `(2·a.level − b.level, b.index)`.
//! `ThroughSecond`: `b` joined to `(2·b.level − a.level, a.index)`.
//!
//! Each forbidden edge forbids `a`–`b` in return, so checking at insertion time keeps the
//! whole graph free of these patterns.

use crate::types::{Room, TowerShape};

use super::graph::ConnectionGraph;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConflictKind {
    Diamond,
    ThroughFirst,
    ThroughSecond,
}

/// An existing edge that forbids a prospective one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub edge: (Room, Room),
}

/// Which rules are enforced for a given tower.
///
/// A two-level tower cannot be connected without a diamond crossing: each index pair
/// `{i, j}` admits only one of `(0,i)-(1,j)` and `(0,j)-(1,i)`, capping the edge count at
/// `2R - 2` where `2R - 1` edges are needed. Those towers skip the diamond rule; the other
/// two rules cannot fire there anyway.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConflictPolicy {
    diamond: bool,
}

impl ConflictPolicy {
    pub const STRICT: Self = Self { diamond: true };

    pub fn for_shape(shape: TowerShape) -> Self {
        Self { diamond: shape.levels() > 2 }
    }

    pub fn enforces(self, kind: ConflictKind) -> bool {
        match kind {
            ConflictKind::Diamond => self.diamond,
            ConflictKind::ThroughFirst | ConflictKind::ThroughSecond => true,
        }
    }

    /// Every enforced rule that connecting `a` and `b` would break, each evaluated on its own.
    pub fn conflicts(
        self,
        shape: TowerShape,
        graph: &ConnectionGraph,
        a: Room,
        b: Room,
    ) -> Vec<Conflict> {
        [
            (ConflictKind::Diamond, diamond_edge(shape, a, b)),
            (ConflictKind::ThroughFirst, through_edge(shape, a, b)),
            (ConflictKind::ThroughSecond, through_edge(shape, b, a)),
        ]
        .into_iter()
        .filter(|&(kind, _)| self.enforces(kind))
        .filter_map(|(kind, edge)| {
            let (c, d) = edge?;
            graph.are_connected(c, d).then_some(Conflict { kind, edge: (c, d) })
        })
        .collect()
    }

    pub fn is_conflicting(
        self,
        shape: TowerShape,
        graph: &ConnectionGraph,
        a: Room,
        b: Room,
    ) -> bool {
        !self.conflicts(shape, graph, a, b).is_empty()
    }
}

fn diamond_edge(shape: TowerShape, a: Room, b: Room) -> Option<(Room, Room)> {
    let c = shape.room_at(i64::from(b.level), a.index)?;
    let d = shape.room_at(i64::from(a.level), b.index)?;
    Some((c, d))
}

/// The edge from `pivot` that continues straight through it, away from `other`.
fn through_edge(shape: TowerShape, pivot: Room, other: Room) -> Option<(Room, Room)> {
    let level = 2 * i64::from(pivot.level) - i64::from(other.level);
    let c = shape.room_at(level, other.index)?;
    Some((pivot, c))
}

/// Every edge of `graph` that an enforced rule forbids, paired with the rule it breaks.
pub fn violations(
    policy: ConflictPolicy,
    shape: TowerShape,
    graph: &ConnectionGraph,
) -> Vec<((Room, Room), Conflict)> {
    let mut probe = graph.clone();
    let mut found = Vec::new();
    for (a, b) in graph.edges() {
        probe.disconnect(a, b);
        found.extend(policy.conflicts(shape, &probe, a, b).into_iter().map(|c| ((a, b), c)));
        probe.connect(a, b);
    }
    found
}
