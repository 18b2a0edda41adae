//! Construction orchestration: grow, recover when stuck, pick the goal, add cycles, audit.

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::pathfinding::select_goal;
use crate::types::{Room, TowerShape};

use super::books::place_books;
use super::conflict::ConflictPolicy;
use super::graph::ConnectionGraph;
use super::labels::ComponentLabels;
use super::model::GeneratedTower;
use super::rng::TowerRng;

pub struct TowerGenerator {
    shape: TowerShape,
    config: GeneratorConfig,
}

impl TowerGenerator {
    pub fn new(
        levels: u32,
        rooms_per_level: u32,
        config: GeneratorConfig,
    ) -> Result<Self, GenerationError> {
        Ok(Self { shape: TowerShape::new(levels, rooms_per_level)?, config })
    }

    pub fn shape(&self) -> TowerShape {
        self.shape
    }

    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    pub fn generate(&self) -> Result<GeneratedTower, GenerationError> {
        let mut construction = Construction::new(self.shape, self.config.seed);
        let refactor_attempts =
            construction.grow_until_single_component(self.config.max_refactor_attempts)?;

        // The goal is chosen on the cycle-free graph, before extra connections exist.
        let goal = select_goal(&construction.graph, self.shape);
        let books = place_books(&mut construction.rng, self.shape, goal);

        let extra_edges = if self.config.extra_connections > 0 {
            construction.add_extra_connections(self.config.extra_connections)
        } else {
            Vec::new()
        };

        construction.audit()?;

        info!(
            rooms = self.shape.room_count(),
            edges = construction.graph.edge_count(),
            refactor_attempts,
            goal = %goal,
            extra_requested = self.config.extra_connections,
            extra_added = extra_edges.len(),
            "tower generated"
        );

        Ok(GeneratedTower {
            shape: self.shape,
            seed: self.config.seed,
            graph: construction.graph,
            goal,
            books,
            refactor_attempts,
            extra_connections_requested: self.config.extra_connections,
            extra_edges,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Growing,
    Stuck,
    Refactoring,
    Finished,
}

/// Mutable state owned by one generation run.
pub(super) struct Construction {
    pub(super) shape: TowerShape,
    pub(super) policy: ConflictPolicy,
    pub(super) graph: ConnectionGraph,
    pub(super) labels: ComponentLabels,
    /// Rooms still worth trying as the root of a new connection.
    pub(super) open: Vec<Room>,
    pub(super) distinct_labels: usize,
    pub(super) rng: TowerRng,
}

impl Construction {
    pub(super) fn new(shape: TowerShape, seed: u64) -> Self {
        Self {
            shape,
            policy: ConflictPolicy::for_shape(shape),
            graph: ConnectionGraph::new(shape),
            labels: ComponentLabels::singletons(shape.rooms()),
            open: shape.rooms().collect(),
            distinct_labels: shape.room_count(),
            rng: TowerRng::from_seed(seed),
        }
    }

    /// Runs the construction state machine; returns how many refactors it needed.
    pub(super) fn grow_until_single_component(
        &mut self,
        max_refactor_attempts: u32,
    ) -> Result<u32, GenerationError> {
        let mut attempts = 0_u32;
        let mut phase = Phase::Growing;
        loop {
            phase = match phase {
                Phase::Growing => self.grow_step(),
                Phase::Stuck => {
                    if attempts >= max_refactor_attempts {
                        return Err(GenerationError::RefactorExhausted { attempts });
                    }
                    attempts += 1;
                    Phase::Refactoring
                }
                Phase::Refactoring => {
                    debug!(attempt = attempts, labels = self.distinct_labels, "refactoring");
                    self.refactor()?;
                    Phase::Growing
                }
                Phase::Finished => return Ok(attempts),
            };
        }
    }

    fn grow_step(&mut self) -> Phase {
        if self.distinct_labels <= 1 {
            return Phase::Finished;
        }
        if self.open.is_empty() {
            return Phase::Stuck;
        }

        let slot = self.rng.pick_index(self.open.len());
        let root = self.open[slot];
        let partner = self.find_partner(root, |construction, a, b| {
            construction.labels_differ(a, b) && !construction.is_conflicting(a, b)
        });

        match partner {
            Some(partner) => self.join(root, partner),
            None => {
                self.open.swap_remove(slot);
            }
        }
        Phase::Growing
    }

    /// Scans the candidates of `root` in random order for the first one `accept` allows.
    pub(super) fn find_partner(
        &mut self,
        root: Room,
        accept: impl Fn(&Self, Room, Room) -> bool,
    ) -> Option<Room> {
        let mut candidates = self.shape.candidates(root);
        while let Some(candidate) = self.rng.take(&mut candidates) {
            if accept(self, root, candidate) {
                return Some(candidate);
            }
        }
        None
    }

    pub(super) fn labels_differ(&self, a: Room, b: Room) -> bool {
        self.labels.label_of(a) != self.labels.label_of(b)
    }

    pub(super) fn is_conflicting(&self, a: Room, b: Room) -> bool {
        self.policy.is_conflicting(self.shape, &self.graph, a, b)
    }

    /// Connects two differently labeled rooms and folds the larger label into the smaller.
    fn join(&mut self, a: Room, b: Room) {
        self.graph.connect(a, b);
        if let (Some(label_a), Some(label_b)) = (self.labels.label_of(a), self.labels.label_of(b))
        {
            self.labels.merge_by_relabel(label_a.max(label_b), label_a.min(label_b));
        }
        self.distinct_labels -= 1;
    }

    pub(super) fn reopen(&mut self, rooms: impl IntoIterator<Item = Room>) {
        for room in rooms {
            if !self.open.contains(&room) {
                self.open.push(room);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet, VecDeque};

    use proptest::prelude::*;

    use super::*;
    use crate::towergen::conflict::violations;

    fn component_of(graph: &ConnectionGraph, start: Room) -> BTreeSet<Room> {
        let mut seen = BTreeSet::from([start]);
        let mut open = VecDeque::from([start]);
        while let Some(room) = open.pop_front() {
            for next in graph.neighbors(room) {
                if seen.insert(next) {
                    open.push_back(next);
                }
            }
        }
        seen
    }

    fn labels_match_components(construction: &Construction) -> bool {
        let mut groups: BTreeMap<usize, Vec<Room>> = BTreeMap::new();
        for room in construction.shape.rooms() {
            if let Some(label) = construction.labels.label_of(room) {
                groups.entry(label).or_default().push(room);
            }
        }
        groups.values().all(|group| {
            component_of(&construction.graph, group[0]) == group.iter().copied().collect()
        })
    }

    #[test]
    fn main_loop_ends_with_exactly_one_label() {
        let shape = TowerShape::new(6, 7).unwrap();
        let mut construction = Construction::new(shape, 2_024);
        construction.grow_until_single_component(100).unwrap();
        assert_eq!(construction.labels.distinct_count(), 1);
        assert_eq!(construction.distinct_labels, 1);
        assert_eq!(component_of(&construction.graph, Room::new(0, 0)).len(), 42);
    }

    #[test]
    fn main_loop_builds_a_spanning_tree() {
        let shape = TowerShape::new(5, 6).unwrap();
        let mut construction = Construction::new(shape, 77);
        construction.grow_until_single_component(100).unwrap();
        assert_eq!(construction.graph.edge_count(), shape.room_count() - 1);
    }

    #[test]
    fn zero_refactor_budget_fails_loudly_when_stuck() {
        let shape = TowerShape::new(4, 4).unwrap();
        let stuck_seed = (0..500_u64).find(|&seed| {
            let mut construction = Construction::new(shape, seed);
            construction.grow_until_single_component(100).is_ok_and(|attempts| attempts > 0)
        });
        let Some(seed) = stuck_seed else {
            panic!("expected at least one seed to need a refactor");
        };

        let mut construction = Construction::new(shape, seed);
        assert_eq!(
            construction.grow_until_single_component(0),
            Err(GenerationError::RefactorExhausted { attempts: 0 })
        );
    }

    #[test]
    fn generator_rejects_invalid_shapes_before_building_anything() {
        assert!(matches!(
            TowerGenerator::new(1, 7, GeneratorConfig::default()),
            Err(GenerationError::InvalidParameters { levels: 1, rooms_per_level: 7 })
        ));
        assert!(matches!(
            TowerGenerator::new(3, 3, GeneratorConfig::default()),
            Err(GenerationError::InvalidParameters { levels: 3, rooms_per_level: 3 })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn construction_keeps_labels_exact_and_edges_conflict_free(
            seed in any::<u64>(),
            levels in 2_u32..=6,
            rooms_per_level in 4_u32..=9,
        ) {
            let shape = TowerShape::new(levels, rooms_per_level).unwrap();
            let mut construction = Construction::new(shape, seed);
            let attempts = construction.grow_until_single_component(100);
            prop_assert!(attempts.is_ok(), "seed={seed} shape={shape:?}: {attempts:?}");
            prop_assert_eq!(construction.labels.distinct_count(), 1);
            prop_assert!(labels_match_components(&construction));
            prop_assert!(violations(construction.policy, shape, &construction.graph).is_empty());
        }
    }
}
