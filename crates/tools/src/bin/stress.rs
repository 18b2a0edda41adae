use anyhow::{Context, Result};
use clap::Parser;
use labyrinth_core::{Room, TowerShape, generate_tower};
use labyrinth_tools::checks::verify_tower;
use labyrinth_tools::logging;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(2..))]
    max_levels: u32,
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(4..))]
    max_rooms: u32,
    /// Upper bound on extra connections requested per tower
    #[arg(long, default_value_t = 0)]
    extra: usize,
}

fn draw(rng: &mut ChaCha8Rng, low: u64, high: u64) -> u64 {
    low + rng.next_u64() % (high - low + 1)
}

fn pick_room(rng: &mut ChaCha8Rng, shape: TowerShape) -> Room {
    let level = draw(rng, 0, u64::from(shape.levels()) - 1) as u32;
    let index = draw(rng, 0, u64::from(shape.rooms_per_level()) - 1) as u32;
    Room::new(level, index)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init();

    println!(
        "Starting stress harness on seed {} for {} towers (up to {}x{}, extra <= {})...",
        args.seed, args.runs, args.max_levels, args.max_rooms, args.extra
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut total_refactors = 0_u64;
    let mut worst_refactors = 0_u32;
    let mut shortfalls = 0_u32;
    let mut total_goal_distance = 0_u64;

    for run in 0..args.runs {
        let levels = draw(&mut rng, 2, u64::from(args.max_levels)) as u32;
        let rooms_per_level = draw(&mut rng, 4, u64::from(args.max_rooms)) as u32;
        let extra = draw(&mut rng, 0, args.extra as u64) as usize;
        let tower_seed = rng.next_u64();

        let tower = generate_tower(levels, rooms_per_level, extra, tower_seed).with_context(|| {
            format!("run {run}: {levels}x{rooms_per_level} tower with seed {tower_seed} failed")
        })?;
        let a = pick_room(&mut rng, tower.shape);
        let b = pick_room(&mut rng, tower.shape);
        let goal_distance = verify_tower(&tower, a, b).with_context(|| {
            format!("run {run}: {levels}x{rooms_per_level} tower with seed {tower_seed} is invalid")
        })?;

        total_refactors += u64::from(tower.refactor_attempts);
        worst_refactors = worst_refactors.max(tower.refactor_attempts);
        if tower.extra_connections_added() < extra {
            shortfalls += 1;
        }
        total_goal_distance += goal_distance as u64;
    }

    let runs = u64::from(args.runs.max(1));
    println!("Stress run completed successfully.");
    println!(
        "Refactor attempts: {total_refactors} total, {worst_refactors} worst, {:.2} mean",
        total_refactors as f64 / runs as f64
    );
    println!("Extra-connection shortfalls: {shortfalls}");
    println!("Mean goal distance: {:.2}", total_goal_distance as f64 / runs as f64);
    Ok(())
}
