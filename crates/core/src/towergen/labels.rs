//! Component labels: two rooms share a label iff a path joins them in the current graph.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::Room;

use super::graph::ConnectionGraph;

pub type Label = usize;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComponentLabels {
    labels: BTreeMap<Room, Label>,
}

impl ComponentLabels {
    /// One distinct label per room, numbered in room order.
    pub fn singletons(rooms: impl IntoIterator<Item = Room>) -> Self {
        Self { labels: rooms.into_iter().enumerate().map(|(label, room)| (room, label)).collect() }
    }

    pub fn assign(&mut self, room: Room, label: Label) {
        self.labels.insert(room, label);
    }

    pub fn label_of(&self, room: Room) -> Option<Label> {
        self.labels.get(&room).copied()
    }

    /// Rewrites every `from` label to `to` in one linear pass.
    pub fn merge_by_relabel(&mut self, from: Label, to: Label) {
        if from == to {
            return;
        }
        for label in self.labels.values_mut() {
            if *label == from {
                *label = to;
            }
        }
    }

    /// Assigns `label` to every room reachable from `start` and returns those rooms
    /// in visit order.
    pub fn flood_relabel(
        &mut self,
        graph: &ConnectionGraph,
        start: Room,
        label: Label,
    ) -> Vec<Room> {
        let mut stack = vec![start];
        let mut seen = BTreeSet::from([start]);
        let mut visited = Vec::new();
        while let Some(room) = stack.pop() {
            self.labels.insert(room, label);
            visited.push(room);
            for next in graph.neighbors(room) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        visited
    }

    /// Smallest non-negative label not currently in use.
    pub fn find_unused_label(&self) -> Label {
        let in_use: BTreeSet<Label> = self.labels.values().copied().collect();
        (0..).find(|candidate| !in_use.contains(candidate)).unwrap_or_default()
    }

    pub fn distinct_count(&self) -> usize {
        self.labels.values().collect::<BTreeSet<_>>().len()
    }
}
