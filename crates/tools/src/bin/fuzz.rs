use anyhow::{Result, bail};
use clap::Parser;
use dungeon::{
    Direction, GeneratedLevel, GenerationError, GenerationParams, Heading, generate_level, next_step,
};
use log::debug;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    iterations: u32,
}

fn pick(rng: &mut ChaCha8Rng, low: u64, high: u64) -> u64 {
    low + rng.next_u64() % (high - low + 1)
}

fn check_level(level: &GeneratedLevel) -> Result<()> {
    let graph = &level.graph;
    for (pos, room) in graph.iter() {
        for direction in room.doors.directions() {
            let neighbor = pos.step(direction);
            if !graph.has_door(neighbor, direction.opposite()) {
                bail!("door {direction:?} at {pos:?} has no mirror in {neighbor:?}");
            }
        }
    }

    if level.critical_path.first() != Some(&level.start) {
        bail!("critical path does not begin at the start room");
    }
    if level.critical_path.last() != Some(&level.goal) {
        bail!("critical path does not end at the goal room");
    }
    for pair in level.critical_path.windows(2) {
        let linked = Direction::ALL
            .into_iter()
            .any(|direction| pair[0].step(direction) == pair[1] && graph.has_door(pair[0], direction));
        if !linked {
            bail!("critical path jumps from {:?} to {:?} without a door", pair[0], pair[1]);
        }
    }

    match graph.get(level.goal) {
        Some(goal) if goal.is_dead_end() && goal.variant.is_special() => {}
        Some(goal) => bail!("goal room {:?} is not a special dead end: {goal:?}", level.goal),
        None => bail!("goal room {:?} is missing from the graph", level.goal),
    }

    // Every pathfinder answer from the start must lead through a door.
    let heading = next_step(graph, level.start, level.goal, Heading::ZERO);
    if let Some(direction) = heading.direction()
        && !graph.get(level.goal).is_some_and(|goal| goal.is_dead_end())
        && !graph.has_door(level.start, direction)
    {
        bail!("pathfinder stepped through a wall at {:?}", level.start);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for {} levels...", args.seed, args.iterations);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut generated = 0u32;
    let mut without_goal = 0u32;

    for iteration in 0..args.iterations {
        let params = GenerationParams {
            seed: rng.next_u64(),
            width: pick(&mut rng, 1, 24) as i32,
            height: pick(&mut rng, 1, 24) as i32,
            steps: pick(&mut rng, 0, 600) as u32,
        };
        debug!("iteration {iteration}: {params:?}");

        let level = match generate_level(params) {
            Ok(level) => level,
            Err(GenerationError::NoGoalFound { .. }) => {
                without_goal += 1;
                continue;
            }
            Err(err) => bail!("iteration {iteration} with {params:?} failed: {err}"),
        };
        check_level(&level)?;

        let replay = generate_level(params)?;
        if replay.graph.fingerprint() != level.graph.fingerprint()
            || replay.critical_path != level.critical_path
        {
            bail!("iteration {iteration} with {params:?} is not deterministic");
        }
        generated += 1;
    }

    println!("Fuzz complete: {generated} levels checked, {without_goal} without a goal cell.");
    Ok(())
}
