use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use labyrinth_core::{Room, TowerGenerator, TowerSnapshot, shortest_path};
use labyrinth_tools::logging;
use labyrinth_tools::report::{format_path, render_report};
use labyrinth_tools::seed::generate_runtime_seed;
use labyrinth_tools::settings::{ConfigFile, Overrides, parse_room, resolve_config};
use tracing::{error, info};

/// Generate a tower of rooms joined by non-crossing stairways
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of levels (at least 2)
    levels: u32,
    /// Rooms on each level, the last one being the core room (at least 4)
    rooms_per_level: u32,
    /// Cycle-forming connections to add after the spanning tree is built
    extra_connections: Option<usize>,
    #[arg(short, long)]
    seed: Option<u64>,
    /// TOML file with `seed`, `extra_connections` and `max_refactor_attempts`
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print the tower as a JSON snapshot instead of the text report
    #[arg(long)]
    json: bool,
    /// Start room `L,I` of an extra shortest-path query
    #[arg(long, value_parser = parse_room, conflicts_with = "json")]
    path_from: Option<Room>,
    /// End room `L,I` of an extra shortest-path query; defaults to the goal
    #[arg(long, value_parser = parse_room, conflicts_with = "json")]
    path_to: Option<Room>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    let file = match &args.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    let overrides = Overrides { seed: args.seed, extra_connections: args.extra_connections };
    let (config, seed) = resolve_config(file, overrides, generate_runtime_seed());
    info!(seed = seed.value(), source = seed.source(), "seed selected");

    let tower = TowerGenerator::new(args.levels, args.rooms_per_level, config)
        .and_then(|generator| generator.generate())
        .inspect_err(|err| error!(%err, "tower generation failed"))
        .with_context(|| {
            format!(
                "Failed to generate a {}x{} tower with seed {}",
                args.levels,
                args.rooms_per_level,
                seed.value()
            )
        })?;

    if args.json {
        let snapshot = TowerSnapshot::from(&tower);
        let json = serde_json::to_string_pretty(&snapshot)
            .context("Failed to serialize tower snapshot")?;
        println!("{json}");
        return Ok(());
    }

    let entrance = Room::new(0, 0);
    let entrance_path = shortest_path(&tower, entrance, tower.goal)
        .with_context(|| format!("Goal {} is unreachable from {entrance}", tower.goal))?;
    print!("{}", render_report(&tower, seed, &entrance_path));

    if args.path_from.is_some() || args.path_to.is_some() {
        let from = args.path_from.unwrap_or(entrance);
        let to = args.path_to.unwrap_or(tower.goal);
        for room in [from, to] {
            ensure!(tower.shape.contains(room), "Room {room} is outside the tower");
        }
        let path = shortest_path(&tower, from, to)
            .with_context(|| format!("No path from {from} to {to}"))?;
        println!("Path {from} -> {to} ({} steps): {}", path.len() - 1, format_path(&path));
    }

    Ok(())
}
