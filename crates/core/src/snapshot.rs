//! Detached, serializable copy of a generated tower that answers the same queries.

use serde::{Deserialize, Serialize};

use crate::query::{BookSource, ConnectionSource};
use crate::towergen::GeneratedTower;
use crate::types::Room;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    pub room: Room,
    pub title: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerSnapshot {
    pub levels: u32,
    pub rooms_per_level: u32,
    pub seed: u64,
    pub connections: Vec<(Room, Room)>,
    pub goal: Room,
    pub books: Vec<BookEntry>,
}

impl From<&GeneratedTower> for TowerSnapshot {
    fn from(tower: &GeneratedTower) -> Self {
        Self {
            levels: tower.shape.levels(),
            rooms_per_level: tower.shape.rooms_per_level(),
            seed: tower.seed,
            connections: tower.graph.edges(),
            goal: tower.goal,
            books: tower
                .books
                .iter()
                .map(|(&room, title)| BookEntry { room, title: title.clone() })
                .collect(),
        }
    }
}

impl ConnectionSource for TowerSnapshot {
    /// Scans the stored edge list, the way a table-backed store answers one query.
    fn query_connections(&self, room: Room) -> Vec<Room> {
        let mut found: Vec<Room> = self
            .connections
            .iter()
            .filter_map(|&(a, b)| match (a == room, b == room) {
                (true, _) => Some(b),
                (_, true) => Some(a),
                _ => None,
            })
            .collect();
        found.sort_unstable();
        found
    }
}

impl BookSource for TowerSnapshot {
    fn query_books_in_room(&self, room: Room) -> Vec<String> {
        self.books.iter().filter(|entry| entry.room == room).map(|e| e.title.clone()).collect()
    }
}
