//! Cycle injection once the tower is a single component.

use tracing::warn;

use crate::types::Room;

use super::generator::Construction;

impl Construction {
    /// Adds up to `requested` conflict-free edges between unconnected candidates. Stops early,
    /// without error, when no open room has a usable candidate left.
    pub(super) fn add_extra_connections(&mut self, requested: usize) -> Vec<(Room, Room)> {
        self.open = self.shape.rooms().collect();
        let mut added = Vec::new();

        while added.len() < requested && !self.open.is_empty() {
            let slot = self.rng.pick_index(self.open.len());
            let root = self.open[slot];
            let partner = self.find_partner(root, |construction, a, b| {
                !construction.graph.are_connected(a, b) && !construction.is_conflicting(a, b)
            });
            match partner {
                Some(partner) => {
                    self.graph.connect(root, partner);
                    added.push((root, partner));
                }
                None => {
                    self.open.swap_remove(slot);
                }
            }
        }

        if added.len() < requested {
            warn!(requested, added = added.len(), "ran out of rooms for extra connections");
        }
        added
    }
}
