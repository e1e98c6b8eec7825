//! The shared movement primitive used by the player and every pursuer.

use glam::Vec2;
use tracing::trace;

use crate::geometry::Aabb;
use crate::maze::direction::Direction;
use crate::maze::Maze;

/// What happened to a movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The agent advanced to the returned position.
    Advanced,
    /// The computed position still overlapped a wall; the whole step was
    /// discarded and the agent keeps its pre-tick position.
    Blocked,
    /// No heading: the agent is holding position.
    Idle,
}

/// Advances an agent one tick along its heading.
///
/// The next position is clamped so the agent's box never leaves the world
/// bounds, then rejected outright if it would overlap a wall — a rejected
/// step stalls the agent for one tick rather than letting it clip through
/// geometry at high speed or low frame rate.
pub fn step(
    maze: &Maze,
    position: Vec2,
    size: Vec2,
    heading: Option<Direction>,
    speed: f32,
    delta: f32,
) -> (Vec2, MoveOutcome) {
    let Some(direction) = heading else {
        return (position, MoveOutcome::Idle);
    };

    let mut next = position + direction.as_vec2() * speed * delta;
    next.x = next.x.clamp(0.0, maze.width() - size.x);
    next.y = next.y.clamp(0.0, maze.height() - size.y);

    if maze.is_wall_overlap(&Aabb::new(next, size)) {
        trace!(?direction, ?next, "movement rejected: wall overlap");
        (position, MoveOutcome::Blocked)
    } else {
        (next, MoveOutcome::Advanced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{RAW_LAYOUT, TILE_SIZE};

    const SIZE: Vec2 = Vec2::new(30.0, 30.0);

    fn stock() -> Maze {
        Maze::parse(&RAW_LAYOUT, TILE_SIZE).unwrap()
    }

    #[test]
    fn test_step_advances_in_open_space() {
        let maze = stock();
        let start = Vec2::new(9.0 * TILE_SIZE + 5.0, 5.0 * TILE_SIZE + 5.0);
        let (next, outcome) = step(&maze, start, SIZE, Some(Direction::Right), 150.0, 1.0 / 60.0);
        assert_eq!(outcome, MoveOutcome::Advanced);
        assert_eq!(next, start + Vec2::X * 2.5);
    }

    #[test]
    fn test_step_idles_without_heading() {
        let maze = stock();
        let start = Vec2::new(365.0, 205.0);
        let (next, outcome) = step(&maze, start, SIZE, None, 150.0, 1.0 / 60.0);
        assert_eq!(outcome, MoveOutcome::Idle);
        assert_eq!(next, start);
    }

    #[test]
    fn test_step_rejects_wall_overlap() {
        let maze = stock();
        // Flush against the left border wall, pushing further left.
        let start = Vec2::new(TILE_SIZE, 5.0 * TILE_SIZE + 5.0);
        let (next, outcome) = step(&maze, start, SIZE, Some(Direction::Left), 150.0, 1.0 / 60.0);
        assert_eq!(outcome, MoveOutcome::Blocked);
        assert_eq!(next, start);
    }

    #[test]
    fn test_step_rejects_huge_step_through_wall() {
        let maze = stock();
        let start = Vec2::new(2.0 * TILE_SIZE + 5.0, 5.0 * TILE_SIZE + 5.0);
        // A whole second at speed: would tunnel through the border without
        // the overlap rejection.
        let (next, outcome) = step(&maze, start, SIZE, Some(Direction::Left), 150.0, 1.0);
        assert_eq!(outcome, MoveOutcome::Blocked);
        assert_eq!(next, start);
    }
}
