mod common;

use maze_pursuit::constants::PLAYER_SPAWN;
use maze_pursuit::error::GameError;
use maze_pursuit::events::{GameCommand, GameEvent};
use maze_pursuit::game::Simulation;
use maze_pursuit::maze::direction::Direction;
use maze_pursuit::maze::Maze;
use pretty_assertions::assert_eq;

use common::{run_ticks, stock_simulation, DT};

#[test]
fn test_stock_roster() {
    let mut sim = stock_simulation();

    let player = sim.player().unwrap();
    assert_eq!(player.position, PLAYER_SPAWN);
    assert_eq!(player.heading, None);
    assert!(!player.powered_up);

    let ghosts = sim.ghosts();
    assert_eq!(ghosts.len(), 4);
    assert!(ghosts.iter().all(|g| !g.scared));
}

#[test]
fn test_rejects_spawn_inside_wall() {
    // A maze far smaller than the stock spawn coordinates: every spawn box
    // lands outside the playfield, which counts as a wall.
    let maze = Maze::parse(&["###", "#.#", "###"], 40.0).unwrap();
    match Simulation::new(maze, 1) {
        Err(GameError::InvalidState(message)) => assert!(message.contains("spawn")),
        other => panic!("expected InvalidState, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_same_seed_replays_identically() {
    let mut a = stock_simulation();
    let mut b = stock_simulation();

    let script = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];
    for (index, &direction) in script.iter().cycle().take(12).enumerate() {
        a.send(GameCommand::Move(direction));
        b.send(GameCommand::Move(direction));
        run_ticks(&mut a, 25, DT);
        run_ticks(&mut b, 25, DT);
        assert_eq!(a.player().unwrap(), b.player().unwrap(), "tick batch {index}");
        assert_eq!(a.ghosts(), b.ghosts(), "tick batch {index}");
    }
}

#[test]
fn test_agents_never_overlap_walls() {
    let mut sim = stock_simulation();
    let script = [
        Direction::Right,
        Direction::Up,
        Direction::Left,
        Direction::Down,
    ];

    for tick in 0..900 {
        if tick % 30 == 0 {
            sim.send(GameCommand::Move(script[(tick / 30) % script.len()]));
        }
        sim.tick(DT);

        let player = sim.player().unwrap();
        let mut boxes = vec![(player.position, player.size)];
        for ghost in sim.ghosts() {
            boxes.push((ghost.position, ghost.size));
        }

        let maze = sim.world.resource::<Maze>();
        for (position, size) in boxes {
            assert!(
                !maze.is_wall_overlap(&maze_pursuit::geometry::Aabb::new(position, size)),
                "agent at {position} overlaps a wall on tick {tick}"
            );
        }
    }
}

#[test]
fn test_scare_event_does_not_leak_across_ticks() {
    let mut sim = stock_simulation();
    sim.send(GameEvent::PowerPelletEaten);
    run_ticks(&mut sim, 1, DT);
    assert!(sim.ghosts().iter().all(|g| g.scared));

    // A fresh simulation receiving no event stays calm over the same span.
    let mut calm = stock_simulation();
    run_ticks(&mut calm, 1, DT);
    assert!(calm.ghosts().iter().all(|g| !g.scared));
}
