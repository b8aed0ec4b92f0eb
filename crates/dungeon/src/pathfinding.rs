//! Door-aware best-first search that yields a single step toward a target room.
//! Movement is constrained to door-connected rooms, so the frontier expands
//! through door bits rather than free grid neighbours.
//! Scratch state lives only for the duration of one call.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::graph::RoomGraph;
use crate::types::{Heading, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenNode {
    cost: u64,
    y: i32,
    x: i32,
}

#[derive(Clone, Copy, Debug)]
struct Visit {
    parent: Option<Pos>,
    depth: u32,
}

/// Direction an agent at `origin` should move to close in on `target`.
///
/// When the target room is a dead end the agent backs off along the negation
/// of `last_heading` instead. Targets outside the origin's component, or not
/// in the graph at all, yield [`Heading::ZERO`].
pub fn next_step(graph: &RoomGraph, origin: Pos, target: Pos, last_heading: Heading) -> Heading {
    let mut open_set = BTreeSet::new();
    let mut visited = BTreeMap::new();
    open_set.insert(OpenNode { cost: 0, y: origin.y, x: origin.x });
    visited.insert(origin, Visit { parent: None, depth: 0 });

    while let Some(current) = open_set.pop_first() {
        let pos = Pos { y: current.y, x: current.x };
        if pos == target {
            return arrive(graph, &visited, origin, target, last_heading);
        }
        let depth = visited[&pos].depth + 1;
        for (_, neighbor) in graph.neighbors(pos) {
            if visited.contains_key(&neighbor) {
                continue;
            }
            visited.insert(neighbor, Visit { parent: Some(pos), depth });
            let cost = u64::from(depth) + neighbor.manhattan(target) + 1;
            open_set.insert(OpenNode { cost, y: neighbor.y, x: neighbor.x });
        }
    }

    trace!("{target:?} is unreachable from {origin:?}");
    Heading::ZERO
}

fn arrive(
    graph: &RoomGraph,
    visited: &BTreeMap<Pos, Visit>,
    origin: Pos,
    target: Pos,
    last_heading: Heading,
) -> Heading {
    if graph.get(target).is_some_and(|room| room.is_dead_end()) {
        trace!("{target:?} is a dead end, backing off from {last_heading:?}");
        return -last_heading;
    }
    if origin == target {
        return Heading::ZERO;
    }
    let first_step = first_step(visited, origin, target);
    origin.heading_to(first_step)
}

fn first_step(visited: &BTreeMap<Pos, Visit>, origin: Pos, target: Pos) -> Pos {
    let mut step = target;
    while let Some(parent) = visited.get(&step).and_then(|visit| visit.parent) {
        if parent == origin {
            break;
        }
        step = parent;
    }
    step
}
