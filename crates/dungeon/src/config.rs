//! Level configuration shared by the library and the command-line tools.

use serde::{Deserialize, Serialize};

use crate::coords::GridMetrics;
use crate::error::ConfigError;
use crate::mapgen::{GenerationParams, derive_level_seed};

pub const DEFAULT_WIDTH: i32 = 12;
pub const DEFAULT_HEIGHT: i32 = 12;
pub const DEFAULT_STEPS: u32 = 120;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    pub seed: u64,
    pub level: u32,
    pub width: i32,
    pub height: i32,
    pub steps: u32,
    pub metrics: GridMetrics,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            level: 0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            steps: DEFAULT_STEPS,
            metrics: GridMetrics::default(),
        }
    }
}

impl DungeonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let cell_size = self.metrics.cell_size;
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(ConfigError::InvalidCellSize(cell_size));
        }
        Ok(())
    }

    /// Generation inputs for the configured level of the run.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams {
            seed: derive_level_seed(self.seed, self.level),
            width: self.width,
            height: self.height,
            steps: self.steps,
        }
    }
}
