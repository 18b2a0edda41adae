//! Tunable generation knobs, deserializable from any serde format.

use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_REFACTOR_ATTEMPTS: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub extra_connections: usize,
    pub max_refactor_attempts: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self { seed: 0, extra_connections: 0, max_refactor_attempts: DEFAULT_MAX_REFACTOR_ATTEMPTS }
    }
}

impl GeneratorConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, ..Self::default() }
    }
}
