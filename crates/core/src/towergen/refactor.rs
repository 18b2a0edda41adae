//! Stuck-state recovery: break the edges that block one cross-component pair, then force it.

use tracing::debug;

use crate::error::GenerationError;
use crate::types::Room;

use super::conflict::Conflict;
use super::generator::Construction;

impl Construction {
    /// One forced merge. The distinct-label count never ends higher than it started.
    pub(super) fn refactor(&mut self) -> Result<(), GenerationError> {
        let (a, b) = self.find_pair_with_different_labels()?;
        self.force_connect(a, b);
        Ok(())
    }

    /// Rooms in random order, each one's candidates in random order; first cross-label pair wins.
    pub(super) fn find_pair_with_different_labels(
        &mut self,
    ) -> Result<(Room, Room), GenerationError> {
        let mut rooms: Vec<Room> = self.shape.rooms().collect();
        while let Some(room) = self.rng.take(&mut rooms) {
            if let Some(partner) =
                self.find_partner(room, |construction, a, b| construction.labels_differ(a, b))
            {
                return Ok((room, partner));
            }
        }
        Err(GenerationError::NoAlternativeNeighbors)
    }

    /// Removes every edge that forbids `a`-`b`, relabels the pieces, then connects `a` and `b`.
    pub(super) fn force_connect(&mut self, a: Room, b: Room) -> Vec<Conflict> {
        let conflicts = self.policy.conflicts(self.shape, &self.graph, a, b);
        for conflict in &conflicts {
            let (c, d) = conflict.edge;
            self.graph.disconnect(c, d);
            debug!(kind = ?conflict.kind, from = %c, to = %d, "removed conflicting connection");
            for endpoint in [c, d] {
                let label = self.labels.find_unused_label();
                let touched = self.labels.flood_relabel(&self.graph, endpoint, label);
                self.reopen(touched);
            }
        }

        if let (Some(into), Some(from)) = (self.labels.label_of(a), self.labels.label_of(b)) {
            self.labels.merge_by_relabel(from, into);
        }
        self.graph.connect(a, b);
        self.distinct_labels = self.labels.distinct_count();
        debug!(from = %a, to = %b, labels = self.distinct_labels, "forced connection");
        conflicts
    }
}
