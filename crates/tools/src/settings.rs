//! Level settings: optional TOML file, then command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use dungeon::DungeonConfig;

#[derive(Args, Clone, Debug, Default)]
pub struct LevelArgs {
    /// Run seed; a fresh one is generated when neither this flag nor the config sets it
    #[arg(long)]
    pub seed: Option<u64>,
    /// Depth within the run, mixed into the run seed
    #[arg(long)]
    pub level: Option<u32>,
    #[arg(long)]
    pub width: Option<i32>,
    #[arg(long)]
    pub height: Option<i32>,
    /// Random-walk iterations
    #[arg(long)]
    pub steps: Option<u32>,
}

pub fn load_config_file(path: &Path) -> Result<DungeonConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Merges the config file (if any) with flag overrides. `generated_seed` is
/// used only when no seed was given anywhere.
pub fn resolve_config(
    config_path: Option<&Path>,
    args: &LevelArgs,
    generated_seed: u64,
) -> Result<DungeonConfig> {
    let mut config = match config_path {
        Some(path) => load_config_file(path)?,
        None => DungeonConfig { seed: generated_seed, ..DungeonConfig::default() },
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(level) = args.level {
        config.level = level;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(steps) = args.steps {
        config.steps = steps;
    }
    config.validate().context("Invalid level settings")?;
    Ok(config)
}
