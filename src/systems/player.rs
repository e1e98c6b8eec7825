//! Player controller: buffered input intent and tile-snapped movement.

use bevy_ecs::event::EventReader;
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res};
use glam::Vec2;
use tracing::{trace, warn};

use crate::constants::{INPUT_BUFFER_TIME, POWER_DURATION};
use crate::events::{GameCommand, GameEvent};
use crate::geometry::Aabb;
use crate::maze::direction::Direction;
use crate::maze::Maze;
use crate::systems::components::{
    Body, BufferedDirection, DeltaTime, PlayerControlled, Position, PowerState, SpawnPoint, Velocity,
};
use crate::systems::decision;
use crate::systems::movement::{self, MoveOutcome};

/// Buffers movement intents from the surrounding loop. Buffering lets a turn
/// pressed slightly before an intersection still land when the player
/// reaches it.
pub fn player_control_system(
    mut events: EventReader<GameEvent>,
    mut players: Query<&mut BufferedDirection, With<PlayerControlled>>,
) {
    let Ok(mut buffered) = players.single_mut() else {
        warn!("expected exactly one player-controlled entity");
        return;
    };

    for event in events.read() {
        if let GameEvent::Command(GameCommand::Move(direction)) = event {
            *buffered = BufferedDirection::Some {
                direction: *direction,
                remaining_time: INPUT_BUFFER_TIME,
            };
        }
    }
}

/// Applies power and catch signals to the player and ticks the power timer.
pub fn player_state_system(
    delta: Res<DeltaTime>,
    mut events: EventReader<GameEvent>,
    mut players: Query<
        (&mut Position, &mut Velocity, &mut BufferedDirection, &mut PowerState, &SpawnPoint),
        With<PlayerControlled>,
    >,
) {
    let Ok((mut position, mut velocity, mut buffered, mut power, spawn)) = players.single_mut() else {
        return;
    };

    for event in events.read() {
        match event {
            GameEvent::PowerPelletEaten => {
                power.energize(POWER_DURATION);
                trace!(duration = POWER_DURATION, "player powered up");
            }
            GameEvent::PlayerCaught => {
                position.0 = spawn.position;
                velocity.heading = spawn.heading;
                *buffered = BufferedDirection::None;
                *power = PowerState::Normal;
                trace!("player caught, respawned");
            }
            _ => {}
        }
    }

    if power.tick(delta.0) {
        trace!("power expired");
    }
}

/// Tile-snapped buffered movement.
///
/// The player keeps its heading until blocked, and may change heading only
/// while aligned with a tile center and only into a direction whose next
/// tile is wall-free. Accepted turns snap the player onto the lane axis;
/// hitting a wall parks it at the last open tile center.
pub fn player_movement_system(
    maze: Res<Maze>,
    delta: Res<DeltaTime>,
    mut players: Query<(&mut Position, &Body, &mut Velocity, &mut BufferedDirection), With<PlayerControlled>>,
) {
    for (mut position, body, mut velocity, mut buffered) in players.iter_mut() {
        // Decay the buffered intent.
        if let BufferedDirection::Some { direction, remaining_time } = *buffered {
            *buffered = if remaining_time <= 0.0 {
                BufferedDirection::None
            } else {
                BufferedDirection::Some {
                    direction,
                    remaining_time: remaining_time - delta.0,
                }
            };
        }

        let travel = velocity.speed * delta.0;
        let center = body.center(position.0);
        let anchor = maze.nearest_tile_center(center);
        let tolerance = travel * 0.5;
        let aligned = velocity.heading.is_none() || center.distance_squared(anchor) <= tolerance * tolerance;

        if aligned {
            if let BufferedDirection::Some { direction, .. } = *buffered {
                if turn_open(&maze, anchor, body.size, direction) {
                    position.0 = anchor - body.size * 0.5;
                    velocity.heading = Some(direction);
                    *buffered = BufferedDirection::None;
                    trace!(?direction, "player turned");
                }
            }
        }

        let (next, outcome) = movement::step(&maze, position.0, body.size, velocity.heading, velocity.speed, delta.0);
        position.0 = next;

        if outcome == MoveOutcome::Blocked {
            // Park at the lane center so the next accepted turn starts
            // grid-aligned.
            park(&maze, &mut position, body);
            velocity.heading = None;
        }
    }
}

/// True when one tile out from `anchor` in `direction` is wall-free for a
/// box of `size`.
fn turn_open(maze: &Maze, anchor: Vec2, size: Vec2, direction: Direction) -> bool {
    decision::admissible_directions(maze, anchor, size, None).contains(&direction)
}

fn park(maze: &Maze, position: &mut Position, body: &Body) {
    let anchor = maze.nearest_tile_center(body.center(position.0));
    let parked = anchor - body.size * 0.5;
    if !maze.is_wall_overlap(&Aabb::new(parked, body.size)) {
        position.0 = parked;
    }
}
