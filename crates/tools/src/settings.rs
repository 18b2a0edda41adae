//! TOML config file loading and the merge with command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use labyrinth_core::{GeneratorConfig, Room};
use serde::Deserialize;

use crate::seed::SeedChoice;

/// On-disk form of [`GeneratorConfig`]. Every key is optional so that absent keys can be told
/// apart from keys set to their default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub seed: Option<u64>,
    pub extra_connections: Option<usize>,
    pub max_refactor_attempts: Option<u32>,
}

impl ConfigFile {
    pub fn parse(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse generator config TOML")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub extra_connections: Option<usize>,
}

/// Layers defaults, then the file, then explicit flags.
pub fn resolve_config(
    file: ConfigFile,
    overrides: Overrides,
    generated_seed: u64,
) -> (GeneratorConfig, SeedChoice) {
    let defaults = GeneratorConfig::default();
    let seed = SeedChoice::resolve(overrides.seed, file.seed, generated_seed);
    let config = GeneratorConfig {
        seed: seed.value(),
        extra_connections: overrides
            .extra_connections
            .or(file.extra_connections)
            .unwrap_or(defaults.extra_connections),
        max_refactor_attempts: file
            .max_refactor_attempts
            .unwrap_or(defaults.max_refactor_attempts),
    };
    (config, seed)
}

/// Parses `L,I` (spaces and surrounding parentheses allowed) into a room.
pub fn parse_room(raw: &str) -> Result<Room, String> {
    let trimmed = raw.trim().trim_start_matches('(').trim_end_matches(')');
    let Some((level, index)) = trimmed.split_once(',') else {
        return Err(format!("room '{raw}' must look like LEVEL,INDEX"));
    };
    let level = level
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("room level '{}' must be a number", level.trim()))?;
    let index = index
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("room index '{}' must be a number", index.trim()))?;
    Ok(Room::new(level, index))
}
