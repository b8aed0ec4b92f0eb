//! World-space to room-grid conversion and the cell-centering tolerance test.

use serde::{Deserialize, Serialize};

use crate::types::{Pos, WorldPos};

pub const CELL_SIZE: f32 = 16.0;
/// Cosmetic horizontal nudge applied when placing things at a cell centre.
pub const ROOM_X_BIAS: f32 = 0.5;
/// Room row 0 spans world `y` in `[-CELL_SIZE, 0)`.
pub const ROW_OFFSET: i32 = 1;
pub const CENTER_BAND: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridMetrics {
    pub cell_size: f32,
    pub x_bias: f32,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self { cell_size: CELL_SIZE, x_bias: ROOM_X_BIAS }
    }
}

impl GridMetrics {
    pub fn world_to_room(&self, world: WorldPos) -> Pos {
        Pos {
            y: ((world.y / self.cell_size).floor() as i32).saturating_add(ROW_OFFSET),
            x: (world.x / self.cell_size).floor() as i32,
        }
    }

    pub fn room_to_world(&self, pos: Pos) -> WorldPos {
        WorldPos {
            x: (pos.x as f32 + 0.5) * self.cell_size + self.x_bias,
            y: (pos.y as f32 - ROW_OFFSET as f32 + 0.5) * self.cell_size,
        }
    }

    /// Per-axis test for sitting strictly inside the band around a cell midpoint.
    pub fn is_centered(&self, world: WorldPos) -> (bool, bool) {
        (self.axis_centered(world.x), self.axis_centered(world.y))
    }

    fn axis_centered(&self, coordinate: f32) -> bool {
        let offset = (coordinate / self.cell_size).rem_euclid(1.0);
        (offset - 0.5).abs() < CENTER_BAND
    }
}

pub fn world_to_room(world: WorldPos) -> Pos {
    GridMetrics::default().world_to_room(world)
}

pub fn room_to_world(pos: Pos) -> WorldPos {
    GridMetrics::default().room_to_world(pos)
}

pub fn is_centered(world: WorldPos) -> (bool, bool) {
    GridMetrics::default().is_centered(world)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_fraction(fx: f32, fy: f32) -> WorldPos {
        WorldPos::new(fx * CELL_SIZE, fy * CELL_SIZE)
    }

    #[test]
    fn first_playable_row_sits_below_the_origin() {
        assert_eq!(world_to_room(WorldPos::new(1.0, -1.0)), Pos::new(0, 0));
        assert_eq!(world_to_room(WorldPos::new(1.0, 1.0)), Pos::new(0, 1));
        assert_eq!(world_to_room(WorldPos::new(-1.0, -17.0)), Pos::new(-1, -1));
    }

    #[test]
    fn room_to_world_lands_inside_the_same_room() {
        for y in -3..4 {
            for x in -3..4 {
                let pos = Pos::new(x, y);
                let world = room_to_world(pos);
                assert_eq!(world_to_room(world), pos, "round trip through {world:?}");
                assert_eq!(is_centered(world), (true, true), "centre of {pos:?}");
            }
        }
    }

    #[test]
    fn exact_midpoint_is_centered_on_both_axes() {
        assert_eq!(is_centered(at_fraction(0.5, 0.5)), (true, true));
        assert_eq!(is_centered(at_fraction(3.5, -2.5)), (true, true));
    }

    #[test]
    fn cell_edges_are_not_centered() {
        assert_eq!(is_centered(at_fraction(0.1, 0.1)), (false, false));
        assert_eq!(is_centered(at_fraction(0.9, 0.9)), (false, false));
        assert_eq!(is_centered(at_fraction(0.5, 0.9)), (true, false));
    }

    #[test]
    fn far_away_positions_clamp_to_the_coordinate_range() {
        assert_eq!(world_to_room(WorldPos::new(0.0, 1.0e12)), Pos::new(0, i32::MAX));
        assert_eq!(world_to_room(WorldPos::new(1.0e12, -1.0e12)), Pos::new(i32::MAX, i32::MIN + 1));
        assert_eq!(
            world_to_room(WorldPos::new(f32::NEG_INFINITY, f32::INFINITY)),
            Pos::new(i32::MIN, i32::MAX)
        );
    }

    #[test]
    fn nan_positions_map_to_the_first_playable_row() {
        assert_eq!(world_to_room(WorldPos::new(f32::NAN, f32::NAN)), Pos::new(0, 1));
        assert_eq!(is_centered(WorldPos::new(f32::NAN, f32::NAN)), (false, false));
    }

    #[test]
    fn extreme_rooms_have_finite_centres() {
        let low = room_to_world(Pos::new(i32::MIN, i32::MIN));
        let high = room_to_world(Pos::new(i32::MAX, i32::MAX));
        assert!(low.x.is_finite() && low.y.is_finite());
        assert!(high.x.is_finite() && high.y.is_finite());
        assert!(low.x < 0.0 && low.y < 0.0);
        assert!(high.x > 0.0 && high.y > 0.0);
    }

    #[test]
    fn custom_cell_size_scales_the_grid() {
        let metrics = GridMetrics { cell_size: 32.0, x_bias: 0.0 };
        assert_eq!(metrics.world_to_room(WorldPos::new(40.0, 40.0)), Pos::new(1, 2));
        assert_eq!(metrics.room_to_world(Pos::new(1, 2)), WorldPos::new(48.0, 48.0));
    }
}
