//! JSON-friendly summaries printed by the command-line tools.

use dungeon::{DungeonConfig, GeneratedLevel, Pos};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoomReport {
    pub x: i32,
    pub y: i32,
    pub doors: u8,
    pub variant: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelReport {
    pub seed: u64,
    pub level: u32,
    pub width: i32,
    pub height: i32,
    pub fingerprint: String,
    pub start: Pos,
    pub goal: Pos,
    pub critical_path: Vec<Pos>,
    pub rooms: Vec<RoomReport>,
}

impl LevelReport {
    pub fn new(config: &DungeonConfig, level: &GeneratedLevel) -> Self {
        Self {
            seed: config.seed,
            level: config.level,
            width: config.width,
            height: config.height,
            fingerprint: format_fingerprint(level.graph.fingerprint()),
            start: level.start,
            goal: level.goal,
            critical_path: level.critical_path.clone(),
            rooms: level
                .graph
                .iter()
                .map(|(pos, room)| RoomReport {
                    x: pos.x,
                    y: pos.y,
                    doors: room.doors.bits(),
                    variant: room.variant.get(),
                })
                .collect(),
        }
    }
}

/// `0x` followed by exactly 16 lowercase hex digits.
pub fn format_fingerprint(hash: u64) -> String {
    format!("0x{hash:016x}")
}
