//! Whole-tower property checks shared by the stress harness and tests.

use anyhow::{Result, bail, ensure};
use labyrinth_core::towergen::ConflictPolicy;
use labyrinth_core::towergen::conflict::violations;
use labyrinth_core::{GeneratedTower, Room, shortest_path};

/// Asserts connectivity, conflict-freedom, trivial self-paths, path symmetry between `a` and
/// `b`, and goal reachability. Returns the entrance-to-goal distance.
pub fn verify_tower(tower: &GeneratedTower, a: Room, b: Room) -> Result<usize> {
    let shape = tower.shape;
    let entrance = Room::new(0, 0);

    for room in shape.rooms() {
        ensure!(
            shortest_path(tower, entrance, room).is_some(),
            "room {room} is unreachable from {entrance}"
        );
    }

    let found = violations(ConflictPolicy::for_shape(shape), shape, &tower.graph);
    if let Some(((x, y), conflict)) = found.first() {
        bail!(
            "edge {x} <-> {y} conflicts with {} <-> {} ({:?})",
            conflict.edge.0,
            conflict.edge.1,
            conflict.kind
        );
    }

    ensure!(shortest_path(tower, a, a) == Some(vec![a]), "path from {a} to itself is not [{a}]");
    let forward = shortest_path(tower, a, b).map(|path| path.len());
    let backward = shortest_path(tower, b, a).map(|path| path.len());
    ensure!(
        forward == backward,
        "path lengths {a} -> {b} ({forward:?}) and back ({backward:?}) differ"
    );

    let Some(path) = shortest_path(tower, entrance, tower.goal) else {
        bail!("goal {} is unreachable from {entrance}", tower.goal);
    };
    Ok(path.len() - 1)
}
