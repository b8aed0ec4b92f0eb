//! Public inputs and outputs of a generation pass.

use serde::{Deserialize, Serialize};

use crate::graph::RoomGraph;
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationParams {
    pub seed: u64,
    /// Extent along x.
    pub width: i32,
    /// Extent along y.
    pub height: i32,
    /// Random-walk iteration budget.
    pub steps: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedLevel {
    pub graph: RoomGraph,
    pub start: Pos,
    pub goal: Pos,
    /// Start first, goal last; consecutive cells share a door.
    pub critical_path: Vec<Pos>,
}
