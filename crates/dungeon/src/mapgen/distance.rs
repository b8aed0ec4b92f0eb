//! Breadth-first distance labels from the goal, start selection, and the
//! downhill walk that forms the critical path.

use crate::types::Direction;

use super::grid::DoorGrid;
use super::seed::MazeRng;

pub(super) const MAX_BFS_DEPTH: u32 = 25;
pub(super) const START_DISTANCE: u32 = 3;

/// Hop counts from the goal; `None` means unreached within the depth cap.
pub(super) fn label_distances(grid: &DoorGrid, goal: usize) -> Vec<Option<u32>> {
    let mut distances = vec![None; grid.len()];
    distances[goal] = Some(0);
    let mut frontier = vec![goal];
    for depth in 1..=MAX_BFS_DEPTH {
        let mut next_frontier = Vec::new();
        for &cell in &frontier {
            for direction in grid.doors(cell).directions() {
                let Some(neighbor) = grid.neighbor(cell, direction) else {
                    continue;
                };
                if distances[neighbor].is_none() {
                    distances[neighbor] = Some(depth);
                    next_frontier.push(neighbor);
                }
            }
        }
        if next_frontier.is_empty() {
            break;
        }
        frontier = next_frontier;
    }
    distances
}

pub(super) fn select_start(distances: &[Option<u32>], rng: &mut MazeRng) -> Option<usize> {
    let farthest = distances.iter().flatten().copied().max()?;
    let threshold = START_DISTANCE.min(farthest);
    let candidates: Vec<usize> = distances
        .iter()
        .enumerate()
        .filter(|(_, distance)| distance.is_some_and(|distance| distance >= threshold))
        .map(|(index, _)| index)
        .collect();
    if candidates.is_empty() {
        return None;
    }
    Some(candidates[rng.below(candidates.len())])
}

/// Walks from `start` to the distance-0 cell, preferring Up, Down, Left and
/// falling through to Right.
pub(super) fn walk_downhill(grid: &DoorGrid, distances: &[Option<u32>], start: usize) -> Vec<usize> {
    let mut path = vec![start];
    let mut current = start;
    while let Some(distance) = distances[current].filter(|&distance| distance > 0) {
        let downhill = |direction: Direction| {
            if !grid.doors(current).has(direction) {
                return None;
            }
            grid.neighbor(current, direction)
                .filter(|&neighbor| distances[neighbor] == Some(distance - 1))
        };
        let next = [Direction::Up, Direction::Down, Direction::Left]
            .into_iter()
            .find_map(&downhill)
            .or_else(|| downhill(Direction::Right));
        let Some(next) = next else {
            unreachable!("cell {current} at distance {distance} has no downhill neighbor");
        };
        path.push(next);
        current = next;
    }
    path
}
