//! Generation pipeline: walk, goal, distances, start, critical path, variants.

use log::{debug, warn};

use crate::error::GenerationError;

use super::distance::{label_distances, select_start, walk_downhill};
use super::grid::DoorGrid;
use super::model::{GeneratedLevel, GenerationParams};
use super::seed::MazeRng;
use super::variants::build_room_graph;
use super::walk::{carve_random_walk, select_goal};

pub struct MapGenerator {
    params: GenerationParams,
}

impl MapGenerator {
    pub fn new(params: GenerationParams) -> Self {
        Self { params }
    }

    pub fn generate(&self) -> Result<GeneratedLevel, GenerationError> {
        let GenerationParams { seed, width, height, steps } = self.params;
        if width <= 0 || height <= 0 {
            warn!("rejecting {width}x{height} level for seed {seed}");
            return Err(GenerationError::InvalidDimensions { width, height });
        }

        let mut rng = MazeRng::new(seed);
        let mut grid = DoorGrid::new(width as usize, height as usize);
        carve_random_walk(&mut grid, &mut rng, steps);

        let Some(goal) = select_goal(&mut grid, &mut rng) else {
            let doored_cells = grid.doored_cells();
            warn!("no goal cell for seed {seed} ({width}x{height}, {steps} steps)");
            return Err(GenerationError::NoGoalFound { doored_cells });
        };

        let distances = label_distances(&grid, goal);
        let Some(start) = select_start(&distances, &mut rng) else {
            unreachable!("the goal always labels itself at distance 0");
        };
        let path = walk_downhill(&grid, &distances, start);
        let graph = build_room_graph(&grid, &mut rng, goal, &path);

        debug!(
            "seed {seed}: {} rooms, goal {:?}, start {:?}, critical path {} rooms",
            graph.len(),
            grid.pos(goal),
            grid.pos(start),
            path.len()
        );

        Ok(GeneratedLevel {
            graph,
            start: grid.pos(start),
            goal: grid.pos(goal),
            critical_path: path.into_iter().map(|index| grid.pos(index)).collect(),
        })
    }
}
