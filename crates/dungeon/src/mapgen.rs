//! Seeded room-graph generation split into coherent submodules.

pub mod model;

mod distance;
mod generator;
mod grid;
mod seed;
mod variants;
mod walk;

pub use generator::MapGenerator;
pub use model::{GeneratedLevel, GenerationParams};
pub use seed::derive_level_seed;

use crate::error::GenerationError;

pub fn generate_level(params: GenerationParams) -> Result<GeneratedLevel, GenerationError> {
    MapGenerator::new(params).generate()
}
