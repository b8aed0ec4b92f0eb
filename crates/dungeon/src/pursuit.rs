//! Headless pursuit loop: an agent asks the pathfinder for one step per tick
//! and moves room to room until it reaches a stationary target.

use log::debug;
use serde::Serialize;

use crate::graph::RoomGraph;
use crate::pathfinding::next_step;
use crate::types::{Heading, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PursuitOutcome {
    Caught { ticks: u32 },
    /// The pathfinder asked for no movement before the target was reached.
    Stalled { ticks: u32, at: Pos },
    TimedOut { at: Pos },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PursuitTrace {
    pub outcome: PursuitOutcome,
    /// Rooms occupied by the pursuer, starting room first.
    pub trail: Vec<Pos>,
}

pub fn simulate_pursuit(graph: &RoomGraph, from: Pos, target: Pos, max_ticks: u32) -> PursuitTrace {
    let mut pos = from;
    let mut last_heading = Heading::ZERO;
    let mut trail = vec![pos];

    for tick in 0..max_ticks {
        if pos == target {
            return PursuitTrace { outcome: PursuitOutcome::Caught { ticks: tick }, trail };
        }
        let heading = next_step(graph, pos, target, last_heading);
        let Some(direction) = heading.direction() else {
            debug!("pursuer stalled at {pos:?} on tick {tick}");
            return PursuitTrace { outcome: PursuitOutcome::Stalled { ticks: tick, at: pos }, trail };
        };
        // A backing-off heading can point at a wall; the pursuer then holds position.
        if graph.has_door(pos, direction) {
            pos = pos.step(direction);
            last_heading = heading;
            trail.push(pos);
        }
    }

    let outcome = if pos == target {
        PursuitOutcome::Caught { ticks: max_ticks }
    } else {
        PursuitOutcome::TimedOut { at: pos }
    };
    PursuitTrace { outcome, trail }
}
