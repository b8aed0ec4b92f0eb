//! Random-walk door carving and goal selection.

use crate::types::Direction;

use super::grid::DoorGrid;
use super::seed::MazeRng;

pub(super) fn carve_random_walk(grid: &mut DoorGrid, rng: &mut MazeRng, steps: u32) {
    let mut current = rng.below(grid.len());
    for _ in 0..steps {
        let first = rng.below(Direction::ALL.len());
        let destination = (0..Direction::ALL.len())
            .map(|offset| Direction::from_index(first + offset))
            .find_map(|direction| grid.carve(current, direction));
        if let Some(destination) = destination {
            current = destination;
        }
    }
}

/// Picks the goal cell, scanning cells in random order.
///
/// A doorless cell touching the carved region gets a fresh door into it; a
/// cell that already has exactly one door is taken as is. Either way the goal
/// ends up as a dead end.
pub(super) fn select_goal(grid: &mut DoorGrid, rng: &mut MazeRng) -> Option<usize> {
    for candidate in rng.shuffled_indices(grid.len()) {
        let doors = grid.doors(candidate);
        if doors.is_empty() {
            let attach = Direction::ALL.into_iter().find(|&direction| {
                grid.neighbor(candidate, direction)
                    .is_some_and(|neighbor| !grid.doors(neighbor).is_empty())
            });
            if let Some(direction) = attach {
                grid.carve(candidate, direction);
                return Some(candidate);
            }
        } else if doors.count() == 1 {
            return Some(candidate);
        }
    }
    None
}
