use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::Vec2;
use rand::rngs::SmallRng;
use strum_macros::{Display, EnumIter};

use crate::constants;
use crate::geometry::Aabb;
use crate::maze::direction::Direction;
use crate::systems::decision::DecisionMode;

/// World-space position of an agent's bottom-left corner.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Fixed bounding-box size of an agent.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub size: Vec2,
}

impl Body {
    pub fn agent() -> Self {
        Self {
            size: constants::AGENT_SIZE,
        }
    }

    pub fn bounds(&self, position: Vec2) -> Aabb {
        Aabb::new(position, self.size)
    }

    pub fn center(&self, position: Vec2) -> Vec2 {
        position + self.size * 0.5
    }
}

/// Current heading and speed. A `None` heading is the zero vector: the agent
/// holds position until a decision point offers a way out.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub heading: Option<Direction>,
    pub speed: f32,
}

/// The tile center an agent is currently navigating toward. Recomputed each
/// time a new direction is chosen.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct NavTarget(pub Option<Vec2>);

/// A buffered input direction with a short time-to-live, so a turn pressed
/// slightly before an intersection still lands.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub enum BufferedDirection {
    #[default]
    None,
    Some {
        direction: Direction,
        remaining_time: f32,
    },
}

/// Where an agent returns on respawn.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SpawnPoint {
    pub position: Vec2,
    pub heading: Option<Direction>,
}

/// A tag component for the entity controlled by the player.
#[derive(Default, Component)]
pub struct PlayerControlled;

/// The four pursuer personalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum GhostKind {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostKind {
    /// Base movement speed in world units per second.
    pub fn base_speed(self) -> f32 {
        match self {
            GhostKind::Blinky => constants::GHOST_BASE_SPEED,
            GhostKind::Pinky => constants::GHOST_BASE_SPEED * 0.95,
            GhostKind::Inky => constants::GHOST_BASE_SPEED * 0.90,
            GhostKind::Clyde => constants::GHOST_BASE_SPEED * 0.85,
        }
    }

    /// The stock behavior configuration for this kind.
    pub fn behavior(self) -> BehaviorMode {
        match self {
            GhostKind::Blinky => BehaviorMode::DirectPursuit,
            GhostKind::Pinky => BehaviorMode::AmbushPursuit { offset_tiles: 4.0 },
            GhostKind::Inky => BehaviorMode::GatedPursuit {
                radius_tiles: 7.0,
                chase_beyond: false,
            },
            GhostKind::Clyde => BehaviorMode::GatedPursuit {
                radius_tiles: 5.0,
                chase_beyond: true,
            },
        }
    }

    pub fn spawn_position(self) -> Vec2 {
        match self {
            GhostKind::Blinky => constants::BLINKY_SPAWN,
            GhostKind::Pinky => constants::PINKY_SPAWN,
            GhostKind::Inky => constants::INKY_SPAWN,
            GhostKind::Clyde => constants::CLYDE_SPAWN,
        }
    }
}

/// A tag component denoting a pursuer and its personality.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ghost {
    pub kind: GhostKind,
}

/// How a pursuer selects its navigation goal while not scared. Resolved once
/// at construction, not per ghost subclass.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum BehaviorMode {
    /// Target the player's center directly.
    DirectPursuit,
    /// Target a point a fixed number of tiles ahead of the player's facing.
    AmbushPursuit { offset_tiles: f32 },
    /// Pursue only inside (or, with `chase_beyond`, only outside) a
    /// detection radius; otherwise wander.
    GatedPursuit { radius_tiles: f32, chase_beyond: bool },
}

impl BehaviorMode {
    /// Resolves the decision mode and goal point for one tick.
    ///
    /// Gating compares `distance <= radius`: a player exactly on the radius
    /// counts as in range, anything farther is out.
    pub fn resolve(
        &self,
        own_center: Vec2,
        player_center: Vec2,
        player_heading: Option<Direction>,
        tile_size: f32,
    ) -> (DecisionMode, Vec2) {
        match *self {
            BehaviorMode::DirectPursuit => (DecisionMode::Pursue, player_center),
            BehaviorMode::AmbushPursuit { offset_tiles } => {
                // A stationary player still gets a fixed lead offset.
                let facing = player_heading.unwrap_or(Direction::Right);
                (
                    DecisionMode::Pursue,
                    player_center + facing.as_vec2() * offset_tiles * tile_size,
                )
            }
            BehaviorMode::GatedPursuit {
                radius_tiles,
                chase_beyond,
            } => {
                let in_range = own_center.distance(player_center) <= radius_tiles * tile_size;
                if in_range != chase_beyond {
                    (DecisionMode::Pursue, player_center)
                } else {
                    (DecisionMode::Patrol, player_center)
                }
            }
        }
    }
}

/// Pursuer combat state: scared pursuers flee at reduced speed until the
/// countdown runs out. The state is `Scared` iff time remains, so the
/// "scared iff remaining > 0" invariant holds by construction.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum GhostState {
    Normal,
    Scared { remaining: f32 },
}

impl GhostState {
    pub fn is_scared(&self) -> bool {
        matches!(self, GhostState::Scared { .. })
    }

    pub fn scare(&mut self, duration: f32) {
        *self = GhostState::Scared { remaining: duration };
    }

    /// Advances the countdown. Returns true when the scare expired on this
    /// tick.
    pub fn tick(&mut self, delta: f32) -> bool {
        if let GhostState::Scared { remaining } = self {
            *remaining -= delta;
            if *remaining <= 0.0 {
                *self = GhostState::Normal;
                return true;
            }
        }
        false
    }
}

/// Player-side analogue of [`GhostState`]: while powered up the player can
/// eat scared pursuers (judged by the external collision phase).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub enum PowerState {
    Normal,
    PoweredUp { remaining: f32 },
}

impl PowerState {
    pub fn is_powered(&self) -> bool {
        matches!(self, PowerState::PoweredUp { .. })
    }

    pub fn energize(&mut self, duration: f32) {
        *self = PowerState::PoweredUp { remaining: duration };
    }

    /// Advances the countdown. Returns true when the power expired on this
    /// tick.
    pub fn tick(&mut self, delta: f32) -> bool {
        if let PowerState::PoweredUp { remaining } = self {
            *remaining -= delta;
            if *remaining <= 0.0 {
                *self = PowerState::Normal;
                return true;
            }
        }
        false
    }
}

/// Seconds elapsed since the previous tick.
#[derive(Resource)]
pub struct DeltaTime(pub f32);

/// The simulation-owned random source used for patrol choices. Seeded at
/// construction so tests can pin exact wander sequences.
#[derive(Resource)]
pub struct PatrolRng(pub SmallRng);

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub position: Position,
    pub body: Body,
    pub velocity: Velocity,
    pub buffered: BufferedDirection,
    pub power: PowerState,
    pub spawn: SpawnPoint,
}

#[derive(Bundle)]
pub struct GhostBundle {
    pub ghost: Ghost,
    pub behavior: BehaviorMode,
    pub position: Position,
    pub body: Body,
    pub velocity: Velocity,
    pub nav: NavTarget,
    pub state: GhostState,
    pub spawn: SpawnPoint,
}
