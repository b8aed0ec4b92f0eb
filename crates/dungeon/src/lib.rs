pub mod config;
pub mod coords;
pub mod dungeon;
pub mod error;
pub mod graph;
pub mod mapgen;
pub mod pathfinding;
pub mod pursuit;
pub mod types;

pub use config::DungeonConfig;
pub use coords::{GridMetrics, is_centered, room_to_world, world_to_room};
pub use dungeon::Dungeon;
pub use error::{ConfigError, GenerationError};
pub use graph::{Room, RoomGraph};
pub use mapgen::{GeneratedLevel, GenerationParams, MapGenerator, derive_level_seed, generate_level};
pub use pathfinding::next_step;
pub use pursuit::{PursuitOutcome, PursuitTrace, simulate_pursuit};
pub use types::*;
