//! Breadth-first path queries over any connection source.
//! Serves both distance queries and the double-sweep goal heuristic.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::query::ConnectionSource;
use crate::types::{Room, TowerShape};

/// BFS from `start`, issuing one connection query per dequeued room.
///
/// With a goal, returns the shortest path to it (both ends included) or `None` when it is
/// unreachable. Without one, the search runs to exhaustion and returns the path to the last
/// room dequeued.
pub fn find_path<S: ConnectionSource + ?Sized>(
    source: &S,
    start: Room,
    goal: Option<Room>,
) -> Option<Vec<Room>> {
    if goal == Some(start) {
        return Some(vec![start]);
    }

    let mut queue = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);
    let mut came_from = BTreeMap::new();
    let mut last = start;

    while let Some(room) = queue.pop_front() {
        last = room;
        for next in source.query_connections(room) {
            if !seen.insert(next) {
                continue;
            }
            came_from.insert(next, room);
            if goal == Some(next) {
                return Some(reconstruct_path(&came_from, next));
            }
            queue.push_back(next);
        }
    }

    match goal {
        Some(_) => None,
        None => Some(reconstruct_path(&came_from, last)),
    }
}

pub fn shortest_path<S: ConnectionSource + ?Sized>(
    source: &S,
    start: Room,
    goal: Room,
) -> Option<Vec<Room>> {
    find_path(source, start, Some(goal))
}

/// Path to the last room a full BFS from `start` reaches.
pub fn farthest_path<S: ConnectionSource + ?Sized>(source: &S, start: Room) -> Vec<Room> {
    find_path(source, start, None).unwrap_or_else(|| vec![start])
}

/// Number of connections on the shortest path.
pub fn distance<S: ConnectionSource + ?Sized>(source: &S, a: Room, b: Room) -> Option<usize> {
    shortest_path(source, a, b).map(|path| path.len() - 1)
}

/// Two sweeps: the far end of a sweep from `start`, then the far end of a sweep from there.
/// Approximates a diameter; exact only on trees.
pub fn double_sweep<S: ConnectionSource + ?Sized>(source: &S, start: Room) -> Vec<Room> {
    let first = farthest_path(source, start);
    let far_end = first.last().copied().unwrap_or(start);
    farthest_path(source, far_end)
}

/// Goal room: the far end of a double sweep started at the top level's core room.
pub fn select_goal<S: ConnectionSource + ?Sized>(source: &S, shape: TowerShape) -> Room {
    let start = shape.top_core();
    double_sweep(source, start).last().copied().unwrap_or(start)
}

fn reconstruct_path(came_from: &BTreeMap<Room, Room>, goal: Room) -> Vec<Room> {
    let mut current = goal;
    let mut result = vec![current];
    while let Some(&previous) = came_from.get(&current) {
        current = previous;
        result.push(current);
    }
    result.reverse();
    result
}
