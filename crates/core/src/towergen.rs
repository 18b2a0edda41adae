//! Procedural tower generation split into coherent submodules.

pub mod conflict;
pub mod graph;
pub mod labels;
pub mod model;

mod audit;
mod books;
mod extra;
mod generator;
mod refactor;
mod rng;

pub use books::GOAL_BOOK;
pub use conflict::{Conflict, ConflictKind, ConflictPolicy};
pub use generator::TowerGenerator;
pub use graph::ConnectionGraph;
pub use labels::{ComponentLabels, Label};
pub use model::GeneratedTower;

use crate::config::GeneratorConfig;
use crate::error::GenerationError;

pub fn generate_tower(
    levels: u32,
    rooms_per_level: u32,
    extra_connections: usize,
    seed: u64,
) -> Result<GeneratedTower, GenerationError> {
    let config = GeneratorConfig { seed, extra_connections, ..GeneratorConfig::default() };
    TowerGenerator::new(levels, rooms_per_level, config)?.generate()
}
