//! Signals exchanged with the surrounding game loop.

use bevy_ecs::prelude::*;

use crate::maze::direction::Direction;

/// An input intent for the player agent. Input polling itself lives in the
/// surrounding loop; only the resulting intent reaches the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    Move(Direction),
}

/// External signals consumed by the per-tick systems. The collision phase
/// (owned by the game loop) reports pellet and catch outcomes here.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
    /// The player ate a power pellet: scare every pursuer, power the player.
    PowerPelletEaten,
    /// A scared pursuer was caught: it respawns immediately.
    GhostCaught(Entity),
    /// The player was caught while not powered: everyone returns to spawn.
    PlayerCaught,
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
