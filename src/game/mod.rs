//! The simulation facade: owns the ECS world and the fixed system order.

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::constants;
use crate::error::{GameError, GameResult};
use crate::events::GameEvent;
use crate::maze::direction::Direction;
use crate::maze::Maze;
use crate::systems::components::{
    Body, BufferedDirection, DeltaTime, Ghost, GhostBundle, GhostKind, GhostState, NavTarget, PatrolRng,
    PlayerBundle, PlayerControlled, Position, PowerState, SpawnPoint, Velocity,
};
use crate::systems::ghost::{ghost_ai_system, ghost_event_system, ghost_state_system};
use crate::systems::player::{player_control_system, player_movement_system, player_state_system};

/// Read-only snapshot of the player for the surrounding loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerView {
    pub position: Vec2,
    pub size: Vec2,
    pub heading: Option<Direction>,
    pub powered_up: bool,
}

/// Read-only snapshot of one pursuer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GhostView {
    pub entity: Entity,
    pub kind: GhostKind,
    pub position: Vec2,
    pub size: Vec2,
    pub heading: Option<Direction>,
    pub scared: bool,
}

/// One self-contained simulation: a maze, a player, four pursuers, and the
/// schedule that advances them. The surrounding loop drives it with
/// [`Simulation::send`] and [`Simulation::tick`].
pub struct Simulation {
    pub world: World,
    schedule: Schedule,
}

impl Simulation {
    /// Builds a simulation over `maze` with the stock agent roster. `seed`
    /// pins the wander random source, so equal seeds and equal tick/event
    /// sequences replay identically.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] when any agent's spawn box
    /// overlaps a wall of the given maze.
    pub fn new(maze: Maze, seed: u64) -> GameResult<Self> {
        let mut world = World::new();
        EventRegistry::register_event::<GameEvent>(&mut world);

        validate_spawn(&maze, "player", constants::PLAYER_SPAWN)?;
        world.spawn(PlayerBundle {
            player: PlayerControlled,
            position: Position(constants::PLAYER_SPAWN),
            body: Body::agent(),
            velocity: Velocity {
                heading: None,
                speed: constants::PLAYER_SPEED,
            },
            buffered: BufferedDirection::None,
            power: PowerState::Normal,
            spawn: SpawnPoint {
                position: constants::PLAYER_SPAWN,
                heading: None,
            },
        });

        for kind in GhostKind::iter() {
            let position = kind.spawn_position();
            validate_spawn(&maze, &kind.to_string(), position)?;
            world.spawn(GhostBundle {
                ghost: Ghost { kind },
                behavior: kind.behavior(),
                position: Position(position),
                body: Body::agent(),
                velocity: Velocity {
                    heading: Some(Direction::Down),
                    speed: kind.base_speed(),
                },
                nav: NavTarget::default(),
                state: GhostState::Normal,
                spawn: SpawnPoint {
                    position,
                    heading: Some(Direction::Down),
                },
            });
        }

        world.insert_resource(maze);
        world.insert_resource(DeltaTime(0.0));
        world.insert_resource(PatrolRng(SmallRng::seed_from_u64(seed)));

        // Player systems run before pursuer systems, so each pursuer reads
        // the player's position for the current tick.
        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                player_control_system,
                player_state_system,
                player_movement_system,
                ghost_event_system,
                ghost_state_system,
                ghost_ai_system,
            )
                .chain(),
        );

        debug!(seed, "simulation constructed");
        Ok(Self { world, schedule })
    }

    /// Builds a simulation over the stock maze.
    pub fn stock(seed: u64) -> GameResult<Self> {
        let maze = Maze::parse(&constants::RAW_LAYOUT, constants::TILE_SIZE).map_err(GameError::from)?;
        Self::new(maze, seed)
    }

    /// Queues an external signal for the next tick.
    pub fn send(&mut self, event: impl Into<GameEvent>) {
        self.world.resource_mut::<Events<GameEvent>>().send(event.into());
    }

    /// Advances the simulation by `delta` seconds, then retires events that
    /// every system has now seen.
    pub fn tick(&mut self, delta: f32) {
        self.world.insert_resource(DeltaTime(delta));
        self.schedule.run(&mut self.world);
        self.world.resource_mut::<Events<GameEvent>>().update();
    }

    /// Snapshot of the player agent.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidState`] if the world does not hold exactly
    /// one player-controlled entity.
    pub fn player(&mut self) -> GameResult<PlayerView> {
        let mut query = self
            .world
            .query_filtered::<(&Position, &Body, &Velocity, &PowerState), With<PlayerControlled>>();
        let (position, body, velocity, power) = query
            .single(&self.world)
            .map_err(|err| GameError::InvalidState(format!("player query failed: {err}")))?;
        Ok(PlayerView {
            position: position.0,
            size: body.size,
            heading: velocity.heading,
            powered_up: power.is_powered(),
        })
    }

    /// Snapshots of every pursuer, in spawn order.
    pub fn ghosts(&mut self) -> Vec<GhostView> {
        let mut query = self
            .world
            .query::<(Entity, &Ghost, &Position, &Body, &Velocity, &GhostState)>();
        query
            .iter(&self.world)
            .map(|(entity, ghost, position, body, velocity, state)| GhostView {
                entity,
                kind: ghost.kind,
                position: position.0,
                size: body.size,
                heading: velocity.heading,
                scared: state.is_scared(),
            })
            .collect()
    }
}

fn validate_spawn(maze: &Maze, name: &str, position: Vec2) -> GameResult<()> {
    let bounds = Body::agent().bounds(position);
    if maze.is_wall_overlap(&bounds) {
        return Err(GameError::InvalidState(format!(
            "{name} spawn at {position} overlaps a wall"
        )));
    }
    Ok(())
}
