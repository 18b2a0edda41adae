pub mod config;
pub mod error;
pub mod pathfinding;
pub mod query;
pub mod snapshot;
pub mod towergen;
pub mod types;

pub use config::GeneratorConfig;
pub use error::GenerationError;
pub use pathfinding::{distance, double_sweep, farthest_path, find_path, select_goal, shortest_path};
pub use query::{BookSource, ConnectionSource};
pub use snapshot::{BookEntry, TowerSnapshot};
pub use towergen::{ConnectionGraph, GOAL_BOOK, GeneratedTower, TowerGenerator, generate_tower};
pub use types::{Room, TowerShape};
