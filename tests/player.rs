mod common;

use maze_pursuit::constants::{PLAYER_SPAWN, TILE_SIZE};
use maze_pursuit::events::{GameCommand, GameEvent};
use maze_pursuit::maze::direction::Direction;
use pretty_assertions::assert_eq;

use common::{run_ticks, stock_simulation, DT};

#[test]
fn test_command_turns_idle_player_immediately() {
    let mut sim = stock_simulation();
    sim.send(GameCommand::Move(Direction::Right));
    run_ticks(&mut sim, 1, DT);

    let player = sim.player().unwrap();
    assert_eq!(player.heading, Some(Direction::Right));
    // One exact tick of travel from spawn: the idle player was already
    // centered on its lane.
    assert_eq!(player.position.x, PLAYER_SPAWN.x + 150.0 * DT);
    assert_eq!(player.position.y, PLAYER_SPAWN.y);
}

#[test]
fn test_buffered_turn_lands_at_next_tile_center() {
    let mut sim = stock_simulation();
    sim.send(GameCommand::Move(Direction::Up));
    run_ticks(&mut sim, 12, DT);

    // Mid-lane between two tile centers; the turn must wait for the next
    // center, then snap onto its row.
    sim.send(GameCommand::Move(Direction::Right));
    run_ticks(&mut sim, 10, DT);

    let player = sim.player().unwrap();
    assert_eq!(player.heading, Some(Direction::Right));
    assert_eq!(player.position.y, PLAYER_SPAWN.y + TILE_SIZE);
    assert!(player.position.x > PLAYER_SPAWN.x);
}

#[test]
fn test_blocked_player_parks_at_last_open_center() {
    let mut sim = stock_simulation();
    sim.send(GameCommand::Move(Direction::Up));
    // Ten seconds: more than enough to cross the field and hit the top
    // border wall.
    run_ticks(&mut sim, 640, DT);

    let player = sim.player().unwrap();
    assert_eq!(player.heading, None);
    // Topmost open tile of the spawn column, box centered in it.
    assert_eq!(player.position, glam::Vec2::new(365.0, 17.0 * TILE_SIZE + 5.0));
}

#[test]
fn test_power_window_opens_and_closes() {
    let mut sim = stock_simulation();
    sim.send(GameEvent::PowerPelletEaten);

    run_ticks(&mut sim, 1, 0.5);
    assert!(sim.player().unwrap().powered_up);

    run_ticks(&mut sim, 14, 0.5);
    assert!(sim.player().unwrap().powered_up);

    run_ticks(&mut sim, 1, 0.5);
    assert!(!sim.player().unwrap().powered_up);
}
