//! Display variant assignment and conversion of the scratch grid into a room graph.

use crate::graph::{Room, RoomGraph};
use crate::types::Variant;

use super::grid::DoorGrid;
use super::seed::MazeRng;

const REGULAR_VARIANTS: usize = 3;
/// One in four eligible branch rooms becomes special.
const BRANCH_SPECIAL_ODDS: usize = 4;

pub(super) fn build_room_graph(
    grid: &DoorGrid,
    rng: &mut MazeRng,
    goal: usize,
    critical_path: &[usize],
) -> RoomGraph {
    let mut on_path = vec![false; grid.len()];
    for &index in critical_path {
        on_path[index] = true;
    }

    let mut graph = RoomGraph::new();
    for index in 0..grid.len() {
        let doors = grid.doors(index);
        if doors.is_empty() {
            continue;
        }
        let mut variant = Variant::regular(rng.below(REGULAR_VARIANTS));
        if index == goal
            || (!on_path[index] && doors.count() > 1 && rng.below(BRANCH_SPECIAL_ODDS) == 0)
        {
            variant = Variant::SPECIAL;
        }
        graph.insert(grid.pos(index), Room::new(doors, variant));
    }
    graph
}
