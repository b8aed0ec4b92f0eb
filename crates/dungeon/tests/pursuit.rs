use dungeon::{
    Direction, Doors, Dungeon, GenerationParams, Heading, Pos, PursuitOutcome, Room, RoomGraph,
    Variant, WorldPos, generate_level, next_step, room_to_world, simulate_pursuit,
};

fn room(doors: Doors) -> Room {
    Room::new(doors, Variant::new(3).expect("variant 3 is valid"))
}

/// A(0,0) - B(1,0) - C(2,0), with C continuing upward so it is not a dead end.
fn line_graph() -> RoomGraph {
    let mut graph = RoomGraph::new();
    graph.insert(Pos::new(0, 0), room(Doors::RIGHT));
    graph.insert(Pos::new(1, 0), room(Doors::LEFT | Doors::RIGHT));
    graph.insert(Pos::new(2, 0), room(Doors::LEFT | Doors::UP));
    graph.insert(Pos::new(2, 1), room(Doors::DOWN));
    graph
}

#[test]
fn test_line_graph_steps_toward_target() {
    let graph = line_graph();
    let c = Pos::new(2, 0);
    assert_eq!(next_step(&graph, Pos::new(0, 0), c, Heading::ZERO), Direction::Right.heading());
    assert_eq!(next_step(&graph, Pos::new(1, 0), c, Heading::ZERO), Direction::Right.heading());
}

#[test]
fn test_dead_end_target_returns_negated_last_direction() {
    let graph = line_graph();
    let dead_end = Pos::new(0, 0);
    for last in [Direction::Up, Direction::Left, Direction::Right].map(Direction::heading) {
        assert_eq!(next_step(&graph, Pos::new(2, 0), dead_end, last), -last);
    }
}

#[test]
fn test_world_positions_drive_the_pathfinder() {
    let mut dungeon = Dungeon::new();
    let mut checked = 0;
    for seed in 0..32_u64 {
        let Ok(path) = dungeon.generate(seed, 12, 12, 160) else {
            continue;
        };
        let graph = dungeon.graph();
        let goal = *path.last().expect("path ends at the goal");
        let last = Direction::Up.heading();
        let heading =
            dungeon.next_step_direction(room_to_world(path[0]), room_to_world(goal), last);
        assert_eq!(heading, -last, "the goal is a dead end, seed {seed}");

        let nudged = WorldPos::new(room_to_world(path[0]).x + 3.0, room_to_world(path[0]).y - 3.0);
        assert_eq!(dungeon.world_to_room(nudged), path[0]);
        assert!(graph.contains(path[0]));
        checked += 1;
    }
    assert!(checked > 0);
}

#[test]
fn test_pursuit_on_generated_levels_only_moves_through_doors() {
    let mut checked = 0;
    for seed in 0..32_u64 {
        let Ok(level) = generate_level(GenerationParams { seed, width: 10, height: 10, steps: 150 })
        else {
            continue;
        };
        let Some(target) = level
            .critical_path
            .iter()
            .rev()
            .copied()
            .find(|pos| level.graph.get(*pos).is_some_and(|room| !room.is_dead_end()))
        else {
            continue;
        };

        let trace = simulate_pursuit(&level.graph, level.start, target, 400);
        for pair in trace.trail.windows(2) {
            let direction = pair[0].heading_to(pair[1]).direction().expect("one room per tick");
            assert!(level.graph.has_door(pair[0], direction), "seed {seed} walked through a wall");
        }
        if let PursuitOutcome::Caught { ticks } = trace.outcome {
            assert_eq!(trace.trail.last(), Some(&target));
            assert_eq!(ticks as usize + 1, trace.trail.len());
        }
        checked += 1;
    }
    assert!(checked > 0);
}
