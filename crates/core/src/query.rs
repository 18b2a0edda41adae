//! Read-side contract shared by the in-memory tower and any detached copy of it.
//! Path finding only talks to these traits, so it behaves the same whatever store sits behind.

use crate::towergen::{ConnectionGraph, GeneratedTower};
use crate::types::Room;

pub trait ConnectionSource {
    /// Rooms directly connected to `room`. Order carries no meaning.
    fn query_connections(&self, room: Room) -> Vec<Room>;
}

pub trait BookSource {
    fn query_books_in_room(&self, room: Room) -> Vec<String>;
}

impl ConnectionSource for ConnectionGraph {
    fn query_connections(&self, room: Room) -> Vec<Room> {
        self.neighbors(room).collect()
    }
}

impl ConnectionSource for GeneratedTower {
    fn query_connections(&self, room: Room) -> Vec<Room> {
        self.graph.query_connections(room)
    }
}

impl BookSource for GeneratedTower {
    fn query_books_in_room(&self, room: Room) -> Vec<String> {
        self.books.get(&room).cloned().into_iter().collect()
    }
}
