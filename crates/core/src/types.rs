//! Room identity, tower shape validation, and the candidate-neighbor (adjacency) rule.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

pub const MIN_LEVELS: u32 = 2;
pub const MIN_ROOMS_PER_LEVEL: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Room {
    pub level: u32,
    pub index: u32,
}

impl Room {
    pub const fn new(level: u32, index: u32) -> Self {
        Self { level, index }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.level, self.index)
    }
}

/// Validated tower dimensions. The last index on every level is that level's core room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TowerShape {
    levels: u32,
    rooms_per_level: u32,
}

impl TowerShape {
    pub fn new(levels: u32, rooms_per_level: u32) -> Result<Self, GenerationError> {
        if levels < MIN_LEVELS || rooms_per_level < MIN_ROOMS_PER_LEVEL {
            return Err(GenerationError::InvalidParameters { levels, rooms_per_level });
        }
        Ok(Self { levels, rooms_per_level })
    }

    pub fn levels(self) -> u32 {
        self.levels
    }

    pub fn rooms_per_level(self) -> u32 {
        self.rooms_per_level
    }

    pub fn room_count(self) -> usize {
        self.levels as usize * self.rooms_per_level as usize
    }

    pub fn core_index(self) -> u32 {
        self.rooms_per_level - 1
    }

    pub fn is_core(self, room: Room) -> bool {
        room.index == self.core_index()
    }

    pub fn contains(self, room: Room) -> bool {
        room.level < self.levels && room.index < self.rooms_per_level
    }

    /// Bounds-checked room lookup for coordinates produced by level arithmetic.
    pub fn room_at(self, level: i64, index: u32) -> Option<Room> {
        let level = u32::try_from(level).ok()?;
        let room = Room { level, index };
        self.contains(room).then_some(room)
    }

    /// All rooms in level-major order.
    pub fn rooms(self) -> impl Iterator<Item = Room> {
        let rooms_per_level = self.rooms_per_level;
        (0..self.levels)
            .flat_map(move |level| (0..rooms_per_level).map(move |index| Room { level, index }))
    }

    /// The top level's core room, used as the starting point of the goal sweep.
    pub fn top_core(self) -> Room {
        Room { level: self.levels - 1, index: self.core_index() }
    }

    /// Rooms the adjacency rule permits as neighbors of `room`, lower level first.
    pub fn candidates(self, room: Room) -> Vec<Room> {
        let mut result = Vec::with_capacity(2 * self.rooms_per_level as usize);
        if room.level > 0 {
            self.push_candidates_on_level(room, room.level - 1, &mut result);
        }
        if room.level + 1 < self.levels {
            self.push_candidates_on_level(room, room.level + 1, &mut result);
        }
        result
    }

    pub fn is_candidate(self, a: Room, b: Room) -> bool {
        self.contains(a) && self.contains(b) && self.candidates(a).contains(&b)
    }

    fn push_candidates_on_level(self, room: Room, level: u32, out: &mut Vec<Room>) {
        let ring = self.core_index();
        if self.is_core(room) {
            out.extend((0..ring).map(|index| Room { level, index }));
        } else {
            out.push(Room { level, index: (room.index + 1) % ring });
            out.push(Room { level, index: (room.index + ring - 1) % ring });
            out.push(Room { level, index: ring });
        }
    }
}
