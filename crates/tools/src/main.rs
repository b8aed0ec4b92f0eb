use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use dungeon::{Dungeon, DungeonConfig, Pos, WorldPos, generate_level, simulate_pursuit};
use log::info;

mod report;
mod seed;
mod settings;

use report::LevelReport;
use settings::{LevelArgs, resolve_config};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with level settings; flags override its values
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a level and print it as JSON
    Generate {
        #[command(flatten)]
        level: LevelArgs,
        #[arg(long)]
        pretty: bool,
    },
    /// Send a pursuer through a generated level toward a target room
    Chase {
        #[command(flatten)]
        level: LevelArgs,
        /// Starting room as `x,y`; defaults to the level start
        #[arg(long, value_parser = parse_pos, allow_hyphen_values = true)]
        from: Option<Pos>,
        /// Target room as `x,y`; defaults to the last critical-path room before the goal
        #[arg(long, value_parser = parse_pos, allow_hyphen_values = true)]
        to: Option<Pos>,
        #[arg(long, default_value_t = 500)]
        max_ticks: u32,
    },
    /// Show how a world position maps onto a generated level
    Inspect {
        #[command(flatten)]
        level: LevelArgs,
        #[arg(long, allow_hyphen_values = true)]
        x: f32,
        #[arg(long, allow_hyphen_values = true)]
        y: f32,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let generated_seed = seed::generate_runtime_seed();

    match cli.command {
        Commands::Generate { level, pretty } => {
            let config = resolve_config(config_path, &level, generated_seed)?;
            run_generate(&config, pretty)
        }
        Commands::Chase { level, from, to, max_ticks } => {
            let config = resolve_config(config_path, &level, generated_seed)?;
            run_chase(&config, from, to, max_ticks)
        }
        Commands::Inspect { level, x, y } => {
            let config = resolve_config(config_path, &level, generated_seed)?;
            run_inspect(&config, WorldPos::new(x, y))
        }
    }
}

fn build_dungeon(config: &DungeonConfig) -> Result<Dungeon> {
    info!(
        "generating level {} of run {} ({}x{}, {} steps)",
        config.level, config.seed, config.width, config.height, config.steps
    );
    let mut dungeon = Dungeon::with_metrics(config.metrics);
    dungeon
        .generate_with(config.generation_params())
        .with_context(|| format!("Level generation failed for seed {}", config.seed))?;
    Ok(dungeon)
}

fn run_generate(config: &DungeonConfig, pretty: bool) -> Result<()> {
    let level = generate_level(config.generation_params())
        .with_context(|| format!("Level generation failed for seed {}", config.seed))?;
    let report = LevelReport::new(config, &level);
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

fn run_chase(config: &DungeonConfig, from: Option<Pos>, to: Option<Pos>, max_ticks: u32) -> Result<()> {
    let dungeon = build_dungeon(config)?;
    let path = dungeon.critical_path();
    let from = match from.or(dungeon.start()) {
        Some(pos) => pos,
        None => bail!("generated level has no start room"),
    };
    let to = match to {
        Some(pos) => pos,
        None => path.len().checked_sub(2).map_or(from, |index| path[index]),
    };
    if dungeon.graph().get(from).is_none() {
        bail!("no room at pursuer start {},{}", from.x, from.y);
    }

    let trace = simulate_pursuit(dungeon.graph(), from, to, max_ticks);
    println!("Seed: {}", config.seed);
    println!("Pursuer: {},{} -> Target: {},{}", from.x, from.y, to.x, to.y);
    println!("Outcome: {:?}", trace.outcome);
    println!("Rooms visited: {}", trace.trail.len());
    Ok(())
}

fn run_inspect(config: &DungeonConfig, world: WorldPos) -> Result<()> {
    let dungeon = build_dungeon(config)?;
    let pos = dungeon.world_to_room(world);
    let (centered_x, centered_y) = dungeon.is_centered(world);
    println!("Room: {},{}", pos.x, pos.y);
    match dungeon.graph().get(pos) {
        Some(room) => println!(
            "Doors: {:?} ({} total), variant {}",
            room.doors,
            room.door_count(),
            room.variant.get()
        ),
        None => println!("Doors: none (wall)"),
    }
    println!("Centered: x={centered_x} y={centered_y}");
    println!("At exit: {}", dungeon.is_at_exit(world));
    Ok(())
}

fn parse_pos(raw: &str) -> Result<Pos, String> {
    let Some((x, y)) = raw.split_once(',') else {
        return Err(format!("room '{raw}' must look like x,y"));
    };
    let parse = |value: &str| {
        value.trim().parse::<i32>().map_err(|_| format!("'{value}' in '{raw}' must be a number"))
    };
    Ok(Pos::new(parse(x)?, parse(y)?))
}
