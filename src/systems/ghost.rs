//! Pursuer state machine and per-tick AI.

use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventReader;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::{debug, trace};

use crate::constants::{SCARED_DURATION, SCARED_SPEED_FACTOR};
use crate::events::GameEvent;
use crate::maze::Maze;
use crate::systems::components::{
    BehaviorMode, Body, DeltaTime, Ghost, GhostState, NavTarget, PatrolRng, PlayerControlled, Position, SpawnPoint,
    Velocity,
};
use crate::systems::decision::{self, DecisionMode};
use crate::systems::movement;

/// Returns a pursuer to its spawn point in `Normal` state with its initial
/// heading, dropping any navigation target.
fn respawn(
    position: &mut Position,
    velocity: &mut Velocity,
    nav: &mut NavTarget,
    state: &mut GhostState,
    spawn: &SpawnPoint,
) {
    position.0 = spawn.position;
    velocity.heading = spawn.heading;
    nav.0 = None;
    *state = GhostState::Normal;
}

/// Applies external power and catch signals to pursuers.
pub fn ghost_event_system(
    mut events: EventReader<GameEvent>,
    mut ghosts: Query<(
        Entity,
        &Ghost,
        &mut Position,
        &mut Velocity,
        &mut NavTarget,
        &mut GhostState,
        &SpawnPoint,
    )>,
) {
    for event in events.read() {
        match *event {
            GameEvent::PowerPelletEaten => {
                for (_, ghost, _, _, _, mut state, _) in ghosts.iter_mut() {
                    state.scare(SCARED_DURATION);
                    debug!(kind = %ghost.kind, duration = SCARED_DURATION, "pursuer scared");
                }
            }
            GameEvent::GhostCaught(caught) => {
                if let Ok((_, ghost, mut position, mut velocity, mut nav, mut state, spawn)) = ghosts.get_mut(caught) {
                    debug!(kind = %ghost.kind, "pursuer caught, respawning");
                    respawn(&mut position, &mut velocity, &mut nav, &mut state, spawn);
                }
            }
            GameEvent::PlayerCaught => {
                for (_, ghost, mut position, mut velocity, mut nav, mut state, spawn) in ghosts.iter_mut() {
                    trace!(kind = %ghost.kind, "player caught, resetting pursuer");
                    respawn(&mut position, &mut velocity, &mut nav, &mut state, spawn);
                }
            }
            GameEvent::Command(_) => {}
        }
    }
}

/// Ticks every scared countdown once per frame.
pub fn ghost_state_system(delta: Res<DeltaTime>, mut ghosts: Query<(&Ghost, &mut GhostState)>) {
    for (ghost, mut state) in ghosts.iter_mut() {
        if state.tick(delta.0) {
            debug!(kind = %ghost.kind, "scare expired");
        }
    }
}

/// Per-tick pursuit AI: resolves each pursuer's goal from its behavior mode
/// (or flees while scared), re-decides direction at tile centers and in
/// front of walls, and advances through the shared mover.
///
/// Runs after the player systems so every pursuer reads the player's
/// position for the current tick, never the previous one.
pub fn ghost_ai_system(
    maze: Res<Maze>,
    delta: Res<DeltaTime>,
    mut rng: ResMut<PatrolRng>,
    players: Query<(&Position, &Body, &Velocity), With<PlayerControlled>>,
    mut ghosts: Query<
        (&Ghost, &BehaviorMode, &GhostState, &Body, &mut Position, &mut Velocity, &mut NavTarget),
        Without<PlayerControlled>,
    >,
) {
    let Ok((player_position, player_body, player_velocity)) = players.single() else {
        return;
    };
    let player_center = player_body.center(player_position.0);
    let tile = maze.tile_size();

    for (ghost, behavior, state, body, mut position, mut velocity, mut nav) in ghosts.iter_mut() {
        let scared = state.is_scared();
        velocity.speed = ghost.kind.base_speed() * if scared { SCARED_SPEED_FACTOR } else { 1.0 };

        let center = body.center(position.0);
        let (mode, goal) = if scared {
            (DecisionMode::Flee, player_center)
        } else {
            behavior.resolve(center, player_center, player_velocity.heading, tile)
        };

        let travel = velocity.speed * delta.0;
        if decision::at_decision_point(&maze, center, body.size, velocity.heading, nav.0, travel) {
            match decision::choose_direction(&maze, center, body.size, velocity.heading, goal, mode, &mut rng.0) {
                Some(direction) => {
                    // Re-align to the lane before turning so sub-tile drift
                    // cannot accumulate across decisions.
                    let anchor = maze.nearest_tile_center(center);
                    position.0 = anchor - body.size * 0.5;
                    velocity.heading = Some(direction);
                    nav.0 = Some(anchor + direction.as_vec2() * tile);
                    trace!(kind = %ghost.kind, ?mode, ?direction, "pursuer chose direction");
                }
                None => {
                    velocity.heading = None;
                    nav.0 = None;
                    trace!(kind = %ghost.kind, "pursuer boxed in, holding position");
                }
            }
        }

        let (next, _outcome) = movement::step(&maze, position.0, body.size, velocity.heading, velocity.speed, delta.0);
        position.0 = next;
    }
}
