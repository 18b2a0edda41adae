//! Public data model for a generated tower.

use std::collections::BTreeMap;

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Room, TowerShape};

use super::graph::ConnectionGraph;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedTower {
    pub shape: TowerShape,
    pub seed: u64,
    pub graph: ConnectionGraph,
    pub goal: Room,
    pub books: BTreeMap<Room, String>,
    pub refactor_attempts: u32,
    pub extra_connections_requested: usize,
    /// Cycle-forming edges added after the tower became one component, in insertion order.
    pub extra_edges: Vec<(Room, Room)>,
}

impl GeneratedTower {
    pub fn extra_connections_added(&self) -> usize {
        self.extra_edges.len()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend(self.shape.levels().to_le_bytes());
        bytes.extend(self.shape.rooms_per_level().to_le_bytes());

        let edges = self.graph.edges();
        bytes.extend((edges.len() as u32).to_le_bytes());
        for (a, b) in edges {
            push_room(&mut bytes, a);
            push_room(&mut bytes, b);
        }

        push_room(&mut bytes, self.goal);

        bytes.extend((self.books.len() as u32).to_le_bytes());
        for (room, title) in &self.books {
            push_room(&mut bytes, *room);
            bytes.extend((title.len() as u32).to_le_bytes());
            bytes.extend(title.as_bytes());
        }

        bytes.extend(self.refactor_attempts.to_le_bytes());
        bytes.extend((self.extra_edges.len() as u32).to_le_bytes());
        bytes
    }

    /// Stable xxh3 digest of [`Self::canonical_bytes`].
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}

fn push_room(bytes: &mut Vec<u8>, room: Room) {
    bytes.extend(room.level.to_le_bytes());
    bytes.extend(room.index.to_le_bytes());
}
