//! This module contains all the constants used by the simulation.

use glam::Vec2;

/// The side length of one maze tile, in world units.
pub const TILE_SIZE: f32 = 40.0;

/// The size of the stock maze, in tiles.
pub const LAYOUT_COLS: usize = 18;
pub const LAYOUT_ROWS: usize = 19;

/// The stock wall layout, one character per tile, row 0 at the top of the
/// world. A bordered room with four U-shaped obstacles.
pub const RAW_LAYOUT: [&str; LAYOUT_ROWS] = [
    "##################",
    "#................#",
    "#................#",
    "#.........###....#",
    "#.........#.#....#",
    "#................#",
    "#................#",
    "#..##............#",
    "#..#.............#",
    "#..##.........##.#",
    "#..............#.#",
    "#.............##.#",
    "#................#",
    "#................#",
    "#....#.#.........#",
    "#....###.........#",
    "#................#",
    "#................#",
    "##################",
];

/// The bounding-box size shared by the player and every pursuer.
pub const AGENT_SIZE: Vec2 = Vec2::new(30.0, 30.0);

/// Offset that centers an agent's box inside its spawn tile.
pub const SPAWN_OFFSET: f32 = (TILE_SIZE - AGENT_SIZE.x) / 2.0;

/// Player movement speed, in world units per second.
pub const PLAYER_SPEED: f32 = 150.0;

/// Base pursuer speed, in world units per second. Per-kind speeds are
/// derived from this in [`crate::systems::components::GhostKind`].
pub const GHOST_BASE_SPEED: f32 = 100.0;

/// Speed multiplier applied to a scared pursuer.
pub const SCARED_SPEED_FACTOR: f32 = 0.5;

/// How long a pursuer stays scared after a power pellet, in seconds.
pub const SCARED_DURATION: f32 = 8.0;

/// How long the player's power-up lasts, in seconds. Kept equal to
/// [`SCARED_DURATION`] so the predator and prey windows coincide.
pub const POWER_DURATION: f32 = 8.0;

/// How long a buffered input direction stays valid, in seconds.
pub const INPUT_BUFFER_TIME: f32 = 0.25;

/// Fixed minimum lookahead for the "about to hit a wall" probe, in world
/// units. The actual probe uses the larger of this and one tick's travel.
pub const WALL_PROBE: f32 = 2.0;

/// Returns the world-space spawn position for an agent parked on the given
/// tile. Coordinates are counted from the bottom-left of the world.
const fn spawn(col: f32, row_from_bottom: f32) -> Vec2 {
    Vec2::new(
        col * TILE_SIZE + SPAWN_OFFSET,
        row_from_bottom * TILE_SIZE + SPAWN_OFFSET,
    )
}

pub const PLAYER_SPAWN: Vec2 = spawn(9.0, 5.0);
pub const BLINKY_SPAWN: Vec2 = spawn(9.0, 11.0);
pub const PINKY_SPAWN: Vec2 = spawn(8.0, 10.0);
pub const INKY_SPAWN: Vec2 = spawn(10.0, 10.0);
pub const CLYDE_SPAWN: Vec2 = spawn(9.0, 9.0);
