//! Plain-text rendering of a generated tower.

use std::fmt::Write;

use labyrinth_core::{GeneratedTower, Room};

use crate::seed::SeedChoice;

pub fn format_path(path: &[Room]) -> String {
    path.iter().map(Room::to_string).collect::<Vec<_>>().join(" -> ")
}

pub fn render_report(tower: &GeneratedTower, seed: SeedChoice, entrance_path: &[Room]) -> String {
    let mut out = String::new();
    let shape = tower.shape;
    let _ = writeln!(
        out,
        "Tower: {} levels x {} rooms ({} rooms), seed {} ({})",
        shape.levels(),
        shape.rooms_per_level(),
        shape.room_count(),
        seed.value(),
        seed.source()
    );

    let _ = writeln!(out, "Connections ({}):", tower.graph.edge_count());
    for (a, b) in tower.graph.edges() {
        let _ = writeln!(out, "  {a} <-> {b}");
    }

    let _ = writeln!(out, "Refactor attempts: {}", tower.refactor_attempts);
    let _ = writeln!(
        out,
        "Extra connections: {} requested, {} added",
        tower.extra_connections_requested,
        tower.extra_connections_added()
    );
    for (a, b) in &tower.extra_edges {
        let _ = writeln!(out, "  extra {a} <-> {b}");
    }

    let _ = writeln!(out, "Goal: {}", tower.goal);
    let steps = entrance_path.len().saturating_sub(1);
    let _ = writeln!(out, "Path to goal ({steps} steps): {}", format_path(entrance_path));

    let _ = writeln!(out, "Books ({}):", tower.books.len());
    for (room, title) in &tower.books {
        let _ = writeln!(out, "  {room}: {title}");
    }
    out
}

#[cfg(test)]
mod tests {
    use labyrinth_core::{GOAL_BOOK, generate_tower, shortest_path};

    use super::*;

    #[test]
    fn path_uses_arrows_between_rooms() {
        assert_eq!(format_path(&[Room::new(0, 0), Room::new(1, 3)]), "(0, 0) -> (1, 3)");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn report_lists_every_edge_and_the_goal_book() {
        let tower = generate_tower(4, 5, 2, 88).unwrap();
        let path = shortest_path(&tower, Room::new(0, 0), tower.goal).unwrap();
        let report = render_report(&tower, SeedChoice::Cli(88), &path);

        let edge_lines = report.lines().filter(|line| line.contains(" <-> ")).count();
        assert_eq!(edge_lines, tower.graph.edge_count() + tower.extra_connections_added());
        assert!(report.contains("seed 88 (command line)"));
        assert!(report.contains(&format!("Goal: {}", tower.goal)));
        assert!(report.contains(GOAL_BOOK));
        let extras = format!(
            "Extra connections: 2 requested, {} added",
            tower.extra_connections_added()
        );
        assert!(report.contains(&extras));
    }
}
