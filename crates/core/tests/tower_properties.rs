use std::collections::{BTreeSet, VecDeque};

use labyrinth_core::towergen::ConflictPolicy;
use labyrinth_core::towergen::conflict::violations;
use labyrinth_core::{
    ConnectionSource, GenerationError, GeneratedTower, Room, distance, generate_tower,
    shortest_path,
};
use proptest::prelude::*;

fn reachable_from(tower: &GeneratedTower, start: Room) -> BTreeSet<Room> {
    let mut seen = BTreeSet::from([start]);
    let mut open = VecDeque::from([start]);
    while let Some(room) = open.pop_front() {
        for next in tower.query_connections(room) {
            if seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    seen
}

fn assert_connected(tower: &GeneratedTower) {
    let all: BTreeSet<Room> = tower.shape.rooms().collect();
    assert_eq!(reachable_from(tower, Room::new(0, 0)), all);
    assert!(tower.shape.rooms().all(|room| tower.graph.degree(room) > 0));
}

#[test]
fn smallest_tower_is_connected() {
    let tower = generate_tower(2, 4, 0, 1).expect("2x4 tower should generate");
    assert_eq!(tower.shape.room_count(), 8);
    assert_eq!(tower.graph.room_count(), 8);
    assert_eq!(tower.graph.edge_count(), 7);
    assert_connected(&tower);
}

#[test]
fn three_level_core_rooms_are_connected_to_adjacent_levels() {
    for seed in [3_u64, 17, 99, 2_024, 65_535] {
        let tower = generate_tower(3, 5, 0, seed).expect("3x5 tower should generate");
        assert_eq!(tower.shape.room_count(), 15);
        assert_connected(&tower);
        assert!(violations(ConflictPolicy::STRICT, tower.shape, &tower.graph).is_empty());
        for level in 0..3_u32 {
            let core = Room::new(level, 4);
            let neighbors = tower.query_connections(core);
            assert!(!neighbors.is_empty(), "core {core} isolated (seed={seed})");
            assert!(neighbors.iter().all(|room| room.level.abs_diff(level) == 1));
        }
    }
}

#[test]
fn invalid_shapes_are_rejected() {
    assert_eq!(
        generate_tower(1, 7, 0, 0).err(),
        Some(GenerationError::InvalidParameters { levels: 1, rooms_per_level: 7 })
    );
    assert_eq!(
        generate_tower(15, 3, 0, 0).err(),
        Some(GenerationError::InvalidParameters { levels: 15, rooms_per_level: 3 })
    );
}

#[test]
fn goal_is_reachable_from_the_entrance() {
    let tower = generate_tower(15, 7, 0, 2_013).unwrap();
    let path = shortest_path(&tower, Room::new(0, 0), tower.goal).expect("goal must be reachable");
    assert_eq!(path.first(), Some(&Room::new(0, 0)));
    assert_eq!(path.last(), Some(&tower.goal));
    assert!(tower.books.contains_key(&tower.goal));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_towers_are_connected_and_conflict_free(
        seed in any::<u64>(),
        levels in 2_u32..=7,
        rooms_per_level in 4_u32..=10,
        extra in 0_usize..=6,
    ) {
        let tower = generate_tower(levels, rooms_per_level, extra, seed);
        prop_assert!(tower.is_ok(), "seed={seed} {levels}x{rooms_per_level}: {tower:?}");
        let tower = tower.unwrap();

        let all: BTreeSet<Room> = tower.shape.rooms().collect();
        prop_assert_eq!(reachable_from(&tower, Room::new(0, 0)), all);
        prop_assert!(
            violations(ConflictPolicy::for_shape(tower.shape), tower.shape, &tower.graph).is_empty()
        );
        if levels > 2 {
            prop_assert!(violations(ConflictPolicy::STRICT, tower.shape, &tower.graph).is_empty());
        }
        for (a, b) in tower.graph.edges() {
            prop_assert!(tower.shape.is_candidate(a, b), "{a} - {b} is not a candidate pair");
        }
    }

    #[test]
    fn extra_connections_never_exceed_the_request(
        seed in any::<u64>(),
        levels in 3_u32..=6,
        rooms_per_level in 4_u32..=8,
        extra in 0_usize..=40,
    ) {
        let tower = generate_tower(levels, rooms_per_level, extra, seed).unwrap();
        prop_assert!(tower.extra_connections_added() <= extra);
        prop_assert_eq!(tower.extra_connections_requested, extra);
        prop_assert_eq!(
            tower.graph.edge_count(),
            tower.shape.room_count() - 1 + tower.extra_connections_added()
        );
    }

    #[test]
    fn shortest_paths_are_symmetric_and_trivial_on_self(
        seed in any::<u64>(),
        extra in 0_usize..=4,
        a_slot in any::<prop::sample::Index>(),
        b_slot in any::<prop::sample::Index>(),
    ) {
        let tower = generate_tower(6, 6, extra, seed).unwrap();
        let rooms: Vec<Room> = tower.shape.rooms().collect();
        let a = rooms[a_slot.index(rooms.len())];
        let b = rooms[b_slot.index(rooms.len())];

        prop_assert_eq!(shortest_path(&tower, a, a), Some(vec![a]));
        let forward = shortest_path(&tower, a, b).map(|path| path.len());
        let backward = shortest_path(&tower, b, a).map(|path| path.len());
        prop_assert!(forward.is_some());
        prop_assert_eq!(forward, backward);
        prop_assert_eq!(distance(&tower, a, b), forward.map(|len| len - 1));
    }
}
