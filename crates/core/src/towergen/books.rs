//! Sparse book placement; the goal room always holds the goal book.

use std::collections::BTreeMap;

use crate::types::{Room, TowerShape};

use super::rng::TowerRng;

pub const GOAL_BOOK: &str = "The Second Book of the Poetics of Aristotle";

const CATALOGUE: [&str; 12] = [
    "The First Book of the Poetics of Aristotle",
    "The Iliad by Homer",
    "The Odyssey by Homer",
    "The Republic by Plato",
    "Categories by Aristotle",
    "Physics by Aristotle",
    "Nicomachean Ethics by Aristotle",
    "The Aeneid by Virgil",
    "The Old Testament in Hebrew",
    "The New Testament in Greek",
    "Strong's Hebrew Dictionary",
    "Strong's Greek Dictionary",
];

/// At most one book per room and roughly one room in three holding a book.
pub(super) fn place_books(
    rng: &mut TowerRng,
    shape: TowerShape,
    goal: Room,
) -> BTreeMap<Room, String> {
    let mut books = BTreeMap::from([(goal, GOAL_BOOK.to_owned())]);
    let mut rooms: Vec<Room> = shape.rooms().filter(|&room| room != goal).collect();
    let mut titles = CATALOGUE.to_vec();

    while books.len() * 3 < shape.room_count() {
        let Some(room) = rng.take(&mut rooms) else { break };
        let Some(title) = rng.take(&mut titles) else { break };
        books.insert(room, title.to_owned());
    }
    books
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn goal_room_always_holds_the_goal_book() {
        let shape = TowerShape::new(4, 6).unwrap();
        let goal = Room::new(3, 2);
        let books = place_books(&mut TowerRng::from_seed(4), shape, goal);
        assert_eq!(books.get(&goal).map(String::as_str), Some(GOAL_BOOK));
    }

    #[test]
    fn roughly_a_third_of_rooms_get_a_book() {
        let shape = TowerShape::new(3, 5).unwrap();
        let books = place_books(&mut TowerRng::from_seed(4), shape, Room::new(0, 0));
        assert_eq!(books.len(), 5);
    }

    #[test]
    fn catalogue_size_caps_placement_in_large_towers() {
        let shape = TowerShape::new(15, 7).unwrap();
        let books = place_books(&mut TowerRng::from_seed(9), shape, Room::new(14, 6));
        assert_eq!(books.len(), CATALOGUE.len() + 1);
        let titles: BTreeSet<&String> = books.values().collect();
        assert_eq!(titles.len(), books.len(), "every title is placed once");
    }

    #[test]
    fn smallest_tower_still_gets_a_book_besides_the_goal() {
        let shape = TowerShape::new(2, 4).unwrap();
        let books = place_books(&mut TowerRng::from_seed(1), shape, Room::new(1, 3));
        assert_eq!(books.len(), 3);
    }
}
