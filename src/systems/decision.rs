//! The directional decision engine.
//!
//! At each decision point an agent enumerates the axis-aligned directions
//! whose next tile is wall-free, drops the exact reverse of its heading
//! unless nothing else remains, and selects one candidate by the caller's
//! policy. Between decision points the agent simply advances.

use glam::Vec2;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use smallvec::SmallVec;

use crate::constants::WALL_PROBE;
use crate::geometry::Aabb;
use crate::maze::direction::Direction;
use crate::maze::Maze;

/// Selection policy applied to the admissible candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionMode {
    /// Minimize distance from the resulting tile center to the goal.
    Pursue,
    /// Maximize that same distance.
    Flee,
    /// Uniform random choice.
    Patrol,
}

/// True when a box of `size` centered `distance` along `direction` from
/// `center` is wall-free.
fn step_clear(maze: &Maze, center: Vec2, size: Vec2, direction: Direction, distance: f32) -> bool {
    let probe = Aabb::from_center(center + direction.as_vec2() * distance, size);
    !maze.is_wall_overlap(&probe)
}

/// Enumerates the directions an agent at `center` may take, in the fixed
/// tie-break order of [`Direction::DIRECTIONS`].
///
/// The reverse of `heading` is excluded, unless every other direction is
/// blocked — then a clear reverse is re-admitted so a dead end never traps
/// an agent. An empty result means the agent is boxed in on all four sides.
pub fn admissible_directions(
    maze: &Maze,
    center: Vec2,
    size: Vec2,
    heading: Option<Direction>,
) -> SmallVec<[Direction; 4]> {
    let reverse = heading.map(Direction::opposite);
    let mut candidates: SmallVec<[Direction; 4]> = SmallVec::new();

    for direction in Direction::DIRECTIONS {
        if Some(direction) == reverse {
            continue;
        }
        if step_clear(maze, center, size, direction, maze.tile_size()) {
            candidates.push(direction);
        }
    }

    if candidates.is_empty() {
        if let Some(reverse) = reverse {
            if step_clear(maze, center, size, reverse, maze.tile_size()) {
                candidates.push(reverse);
            }
        }
    }

    candidates
}

/// Picks a direction for an agent at `center`, or `None` when no direction
/// is admissible (the agent holds position until the maze changes around
/// it — which for a static maze means until it is respawned, or simply the
/// next tick re-evaluates).
///
/// Pursue/Flee rank candidates by squared Euclidean distance from the tile
/// center one tile out to `goal`; ties keep the earliest candidate in
/// enumeration order, which makes selection deterministic. Patrol draws
/// uniformly from the injected random source.
pub fn choose_direction(
    maze: &Maze,
    center: Vec2,
    size: Vec2,
    heading: Option<Direction>,
    goal: Vec2,
    mode: DecisionMode,
    rng: &mut SmallRng,
) -> Option<Direction> {
    let candidates = admissible_directions(maze, center, size, heading);
    if candidates.is_empty() {
        return None;
    }

    match mode {
        DecisionMode::Patrol => candidates.choose(rng).copied(),
        DecisionMode::Pursue | DecisionMode::Flee => {
            let metric =
                |direction: Direction| (center + direction.as_vec2() * maze.tile_size()).distance_squared(goal);
            let mut best = candidates[0];
            let mut best_metric = metric(best);
            for &candidate in &candidates[1..] {
                let candidate_metric = metric(candidate);
                let better = match mode {
                    DecisionMode::Pursue => candidate_metric < best_metric,
                    _ => candidate_metric > best_metric,
                };
                if better {
                    best = candidate;
                    best_metric = candidate_metric;
                }
            }
            Some(best)
        }
    }
}

/// True when a new direction should be chosen this tick: the agent has no
/// heading or no navigation target, has come within half a tick's travel of
/// its target tile center, or would hit a wall within its next step.
pub fn at_decision_point(
    maze: &Maze,
    center: Vec2,
    size: Vec2,
    heading: Option<Direction>,
    nav_target: Option<Vec2>,
    travel: f32,
) -> bool {
    let Some(heading) = heading else {
        return true;
    };
    let Some(target) = nav_target else {
        return true;
    };

    let tolerance = travel * 0.5;
    if center.distance_squared(target) <= tolerance * tolerance {
        return true;
    }

    !step_clear(maze, center, size, heading, travel.max(WALL_PROBE))
}
