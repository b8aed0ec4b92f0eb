use thiserror::Error;

/// Configuration failures that abort level construction. Generation is seeded,
/// so retrying with the same inputs reproduces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("no goal cell found ({doored_cells} cells carved by the random walk)")]
    NoGoalFound { doored_cells: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("level width and height must be positive, got {width}x{height}")]
    NonPositiveDimensions { width: i32, height: i32 },

    #[error("cell size must be a positive finite number, got {0}")]
    InvalidCellSize(f32),
}
