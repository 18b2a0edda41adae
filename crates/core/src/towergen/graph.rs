//! Undirected room connectivity, the ground truth the rest of generation reasons about.

use std::collections::{BTreeMap, BTreeSet};

use crate::types::{Room, TowerShape};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConnectionGraph {
    adjacency: BTreeMap<Room, BTreeSet<Room>>,
}

impl ConnectionGraph {
    /// Every room of `shape`, none connected yet.
    pub fn new(shape: TowerShape) -> Self {
        Self { adjacency: shape.rooms().map(|room| (room, BTreeSet::new())).collect() }
    }

    /// Adds the edge in both directions. Returns `false` for self-loops and existing edges.
    pub fn connect(&mut self, a: Room, b: Room) -> bool {
        if a == b || self.are_connected(a, b) {
            return false;
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        true
    }

    pub fn disconnect(&mut self, a: Room, b: Room) -> bool {
        let removed = self.adjacency.get_mut(&a).is_some_and(|set| set.remove(&b));
        if let Some(set) = self.adjacency.get_mut(&b) {
            set.remove(&a);
        }
        removed
    }

    pub fn are_connected(&self, a: Room, b: Room) -> bool {
        self.adjacency.get(&a).is_some_and(|set| set.contains(&b))
    }

    pub fn neighbors(&self, room: Room) -> impl Iterator<Item = Room> + '_ {
        self.adjacency.get(&room).into_iter().flatten().copied()
    }

    pub fn degree(&self, room: Room) -> usize {
        self.adjacency.get(&room).map_or(0, BTreeSet::len)
    }

    pub fn rooms(&self) -> impl Iterator<Item = Room> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn room_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Each edge once, as `(lower, higher)` in room order.
    pub fn edges(&self) -> Vec<(Room, Room)> {
        self.adjacency
            .iter()
            .flat_map(|(&room, set)| set.range(room..).map(move |&other| (room, other)))
            .filter(|(room, other)| room != other)
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}
