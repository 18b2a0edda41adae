//! Post-construction connectivity audit.

use crate::error::GenerationError;
use crate::types::Room;

use super::generator::Construction;

impl Construction {
    /// Floods from `(0, 0)` with a fresh label; anything left over is an unreachable region.
    pub(super) fn audit(&mut self) -> Result<(), GenerationError> {
        let label = self.labels.find_unused_label();
        self.labels.flood_relabel(&self.graph, Room::new(0, 0), label);
        let components = self.labels.distinct_count();
        if components > 1 {
            return Err(GenerationError::AuditFailed { components });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TowerShape;

    #[test]
    fn audit_passes_after_construction() {
        let mut construction = Construction::new(TowerShape::new(3, 5).unwrap(), 8);
        construction.grow_until_single_component(100).unwrap();
        assert_eq!(construction.audit(), Ok(()));
    }

    #[test]
    fn audit_catches_a_detached_room_even_when_labels_claim_otherwise() {
        let mut construction = Construction::new(TowerShape::new(3, 5).unwrap(), 8);
        construction.grow_until_single_component(100).unwrap();
        let detached = Room::new(2, 4);
        let neighbors: Vec<Room> = construction.graph.neighbors(detached).collect();
        for neighbor in neighbors {
            construction.graph.disconnect(detached, neighbor);
        }

        assert!(matches!(
            construction.audit(),
            Err(GenerationError::AuditFailed { components }) if components >= 2
        ));
    }
}
