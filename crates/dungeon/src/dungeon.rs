//! Level context owned by the caller: generated once, read during gameplay,
//! cleared before the next level is built.

use crate::coords::GridMetrics;
use crate::error::GenerationError;
use crate::graph::{Room, RoomGraph};
use crate::mapgen::{GeneratedLevel, GenerationParams, MapGenerator};
use crate::pathfinding;
use crate::types::{Heading, Pos, WorldPos};

static EMPTY_GRAPH: RoomGraph = RoomGraph::new();

#[derive(Clone, Debug, Default)]
pub struct Dungeon {
    metrics: GridMetrics,
    level: Option<GeneratedLevel>,
}

impl Dungeon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(metrics: GridMetrics) -> Self {
        Self { metrics, ..Self::default() }
    }

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    /// Builds a level and returns its start-to-goal path.
    ///
    /// Any previous level is discarded first, so a failed call leaves the
    /// context empty rather than half-built.
    pub fn generate(
        &mut self,
        seed: u64,
        width: i32,
        height: i32,
        steps: u32,
    ) -> Result<Vec<Pos>, GenerationError> {
        self.generate_with(GenerationParams { seed, width, height, steps })
    }

    pub fn generate_with(&mut self, params: GenerationParams) -> Result<Vec<Pos>, GenerationError> {
        self.clear();
        let level = MapGenerator::new(params).generate()?;
        let path = level.critical_path.clone();
        self.level = Some(level);
        Ok(path)
    }

    pub fn clear(&mut self) {
        self.level = None;
    }

    pub fn is_generated(&self) -> bool {
        self.level.is_some()
    }

    /// Rooms of the current level; empty before generation and after `clear`.
    pub fn graph(&self) -> &RoomGraph {
        self.level.as_ref().map_or(&EMPTY_GRAPH, |level| &level.graph)
    }

    pub fn room(&self, x: i32, y: i32) -> Option<&Room> {
        self.graph().get(Pos::new(x, y))
    }

    pub fn start(&self) -> Option<Pos> {
        self.level.as_ref().map(|level| level.start)
    }

    pub fn goal(&self) -> Option<Pos> {
        self.level.as_ref().map(|level| level.goal)
    }

    pub fn critical_path(&self) -> &[Pos] {
        self.level.as_ref().map_or(&[][..], |level| level.critical_path.as_slice())
    }

    pub fn world_to_room(&self, world: WorldPos) -> Pos {
        self.metrics.world_to_room(world)
    }

    pub fn room_to_world(&self, pos: Pos) -> WorldPos {
        self.metrics.room_to_world(pos)
    }

    pub fn is_centered(&self, world: WorldPos) -> (bool, bool) {
        self.metrics.is_centered(world)
    }

    /// Centered on both axes inside the goal room.
    pub fn is_at_exit(&self, world: WorldPos) -> bool {
        let Some(goal) = self.goal() else {
            return false;
        };
        self.world_to_room(world) == goal && self.is_centered(world) == (true, true)
    }

    pub fn next_step_direction(
        &self,
        origin: WorldPos,
        target: WorldPos,
        last_heading: Heading,
    ) -> Heading {
        pathfinding::next_step(
            self.graph(),
            self.world_to_room(origin),
            self.world_to_room(target),
            last_heading,
        )
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Range;

    use super::*;

    fn generated(seed_range: Range<u64>) -> (Dungeon, Vec<Pos>) {
        let mut dungeon = Dungeon::new();
        for seed in seed_range {
            if let Ok(path) = dungeon.generate(seed, 10, 10, 150) {
                return (dungeon, path);
            }
        }
        panic!("no seed in range produced a level");
    }

    #[test]
    fn empty_context_has_no_rooms() {
        let dungeon = Dungeon::new();
        assert!(!dungeon.is_generated());
        assert!(dungeon.room(0, 0).is_none());
        assert!(dungeon.critical_path().is_empty());
        assert!(!dungeon.is_at_exit(WorldPos::new(8.0, 8.0)));
        assert!(dungeon.graph().is_empty());
        assert_eq!(dungeon.graph().fingerprint(), RoomGraph::new().fingerprint());
    }

    #[test]
    fn clearing_drops_back_to_an_empty_graph() {
        let (mut dungeon, path) = generated(0..16);
        assert!(dungeon.graph().contains(path[0]));
        dungeon.clear();
        assert!(dungeon.graph().is_empty());
        assert!(dungeon.start().is_none());
    }

    #[test]
    fn far_away_world_targets_yield_zero() {
        let (dungeon, path) = generated(0..16);
        let start = dungeon.room_to_world(path[0]);
        for target in [
            WorldPos::new(-1.0e11, -1.0e11),
            WorldPos::new(1.0e11, 1.0e11),
            WorldPos::new(f32::INFINITY, f32::NEG_INFINITY),
        ] {
            assert_eq!(dungeon.next_step_direction(start, target, Heading::ZERO), Heading::ZERO);
        }
    }

    #[test]
    fn failed_generation_clears_the_previous_level() {
        let (mut dungeon, _) = generated(0..16);
        assert!(dungeon.is_generated());
        let err = dungeon.generate(1, 0, 10, 150).expect_err("zero width must fail");
        assert_eq!(err, GenerationError::InvalidDimensions { width: 0, height: 10 });
        assert!(!dungeon.is_generated());
        assert!(dungeon.graph().is_empty());
    }

    #[test]
    fn exit_requires_goal_room_and_centering() {
        let (dungeon, path) = generated(0..16);
        let goal = *path.last().expect("path ends at the goal");
        let centre = dungeon.room_to_world(goal);
        assert!(dungeon.is_at_exit(centre));

        let off_centre = WorldPos::new(centre.x + 6.0, centre.y);
        assert!(!dungeon.is_at_exit(off_centre));

        let start_centre = dungeon.room_to_world(path[0]);
        assert!(!dungeon.is_at_exit(start_centre));
    }

    #[test]
    fn next_step_direction_converts_world_positions() {
        let (dungeon, path) = generated(0..16);
        let from = dungeon.room_to_world(path[0]);
        let to = dungeon.room_to_world(path[path.len() - 2]);
        let heading = dungeon.next_step_direction(from, to, Heading::ZERO);
        let target_room = dungeon.graph().get(path[path.len() - 2]).expect("path room");
        if path.len() > 2 && !target_room.is_dead_end() {
            assert!(!heading.is_zero());
            let direction = heading.direction().expect("cardinal heading");
            assert!(dungeon.graph().has_door(path[0], direction));
        }
    }
}
