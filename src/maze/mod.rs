//! The maze query surface: an immutable wall layout answering the collision
//! and placement questions every agent asks each tick.

pub mod direction;
pub mod parser;

use bevy_ecs::resource::Resource;
use glam::Vec2;

use crate::geometry::Aabb;
use parser::{parse_layout, LayoutError, Tile};

/// The static maze: a rectangular grid of wall and open tiles.
///
/// Layout row 0 maps to the *topmost* world row while world Y grows upward,
/// so every tile-to-world conversion inverts the row index
/// (`world_row = rows - 1 - layout_row`). Queries outside the grid report a
/// wall, which keeps agents from ever leaving the playfield.
#[derive(Debug, Resource)]
pub struct Maze {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
    tile_size: f32,
}

impl Maze {
    /// Builds a maze from a symbolic layout (`#` wall, `.`/space open).
    ///
    /// # Errors
    ///
    /// Returns an error for empty or ragged layouts, unknown characters, or
    /// a non-positive tile size.
    pub fn parse(raw_rows: &[&str], tile_size: f32) -> Result<Self, LayoutError> {
        if tile_size <= 0.0 {
            return Err(LayoutError::NonPositiveTileSize(tile_size));
        }
        let parsed = parse_layout(raw_rows)?;
        Ok(Self {
            tiles: parsed.tiles,
            rows: parsed.rows,
            cols: parsed.cols,
            tile_size,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Total world width, `cols * tile_size`.
    pub fn width(&self) -> f32 {
        self.cols as f32 * self.tile_size
    }

    /// Total world height, `rows * tile_size`.
    pub fn height(&self) -> f32 {
        self.rows as f32 * self.tile_size
    }

    /// Returns the tile at a layout position (row 0 = top). Out-of-range
    /// positions are walls (fail closed).
    pub fn tile(&self, col: i64, row: i64) -> Tile {
        if col < 0 || row < 0 || col >= self.cols as i64 || row >= self.rows as i64 {
            return Tile::Wall;
        }
        self.tiles[row as usize * self.cols + col as usize]
    }

    /// World-space rectangle of a layout tile.
    pub fn tile_rect(&self, col: usize, row: usize) -> Aabb {
        let world_row = self.rows - 1 - row;
        Aabb::new(
            Vec2::new(col as f32 * self.tile_size, world_row as f32 * self.tile_size),
            Vec2::splat(self.tile_size),
        )
    }

    /// World-space center of a layout tile.
    pub fn tile_center(&self, col: usize, row: usize) -> Vec2 {
        self.tile_rect(col, row).center()
    }

    /// Center of the tile containing a world-space point.
    pub fn nearest_tile_center(&self, point: Vec2) -> Vec2 {
        let half = self.tile_size / 2.0;
        Vec2::new(
            (point.x / self.tile_size).floor() * self.tile_size + half,
            (point.y / self.tile_size).floor() * self.tile_size + half,
        )
    }

    /// True iff the box overlaps any wall tile's rectangle. This is the
    /// collision query behind all agent movement. Any part of the box
    /// outside the playfield counts as a wall overlap.
    pub fn is_wall_overlap(&self, bounds: &Aabb) -> bool {
        if bounds.pos.x < 0.0
            || bounds.pos.y < 0.0
            || bounds.pos.x + bounds.size.x > self.width()
            || bounds.pos.y + bounds.size.y > self.height()
        {
            return true;
        }

        // The box is inside the playfield, so the covered tile range can be
        // clamped to the grid; a box flush with the far edge would otherwise
        // index one tile past it.
        let min_col = (bounds.pos.x / self.tile_size).floor() as usize;
        let max_col = (((bounds.pos.x + bounds.size.x) / self.tile_size).floor() as usize).min(self.cols - 1);
        let min_world_row = (bounds.pos.y / self.tile_size).floor() as usize;
        let max_world_row = (((bounds.pos.y + bounds.size.y) / self.tile_size).floor() as usize).min(self.rows - 1);

        for world_row in min_world_row..=max_world_row {
            let row = self.rows - 1 - world_row;
            for col in min_col..=max_col {
                if self.tile(col as i64, row as i64) == Tile::Wall && bounds.overlaps(&self.tile_rect(col, row)) {
                    return true;
                }
            }
        }
        false
    }

    /// True iff the tile containing the point is a wall. Intended for
    /// placement checks (dots, spawns), not for movement collision.
    pub fn is_wall_at(&self, point: Vec2) -> bool {
        let col = (point.x / self.tile_size).floor() as i64;
        let world_row = (point.y / self.tile_size).floor() as i64;
        let row = self.rows as i64 - 1 - world_row;
        self.tile(col, row) == Tile::Wall
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{RAW_LAYOUT, TILE_SIZE};

    fn stock() -> Maze {
        Maze::parse(&RAW_LAYOUT, TILE_SIZE).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let maze = stock();
        assert_eq!(maze.cols(), 18);
        assert_eq!(maze.rows(), 19);
        assert_eq!(maze.width(), 18.0 * TILE_SIZE);
        assert_eq!(maze.height(), 19.0 * TILE_SIZE);
    }

    #[test]
    fn test_rejects_non_positive_tile_size() {
        assert!(matches!(
            Maze::parse(&["#"], 0.0),
            Err(LayoutError::NonPositiveTileSize(_))
        ));
        assert!(Maze::parse(&["#"], -1.0).is_err());
    }

    #[test]
    fn test_row_inversion() {
        let maze = stock();
        // Layout row 0 is the top wall row: its world rect sits at the top.
        let top = maze.tile_rect(0, 0);
        assert_eq!(top.pos.y, maze.height() - TILE_SIZE);
        // The top-left world point is inside the bottom layout row.
        assert!(maze.is_wall_at(Vec2::new(1.0, 1.0)));
        assert!(maze.is_wall_at(Vec2::new(1.0, maze.height() - 1.0)));
        // An interior point of the open field.
        assert!(!maze.is_wall_at(Vec2::new(9.5 * TILE_SIZE, 5.5 * TILE_SIZE)));
    }

    #[test]
    fn test_obstacle_tiles_match_layout() {
        let maze = stock();
        // The bottom "U" obstacle occupies world rows 3..=4 around column 5-7.
        assert!(maze.is_wall_at(Vec2::new(5.5 * TILE_SIZE, 3.5 * TILE_SIZE)));
        assert!(maze.is_wall_at(Vec2::new(6.5 * TILE_SIZE, 3.5 * TILE_SIZE)));
        assert!(!maze.is_wall_at(Vec2::new(6.5 * TILE_SIZE, 4.5 * TILE_SIZE)));
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let maze = stock();
        assert!(maze.is_wall_at(Vec2::new(-5.0, 50.0)));
        assert!(maze.is_wall_at(Vec2::new(50.0, -5.0)));
        assert!(maze.is_wall_at(Vec2::new(maze.width() + 1.0, 50.0)));
        assert!(maze.is_wall_at(Vec2::new(50.0, maze.height() + 1.0)));
    }

    #[test]
    fn test_overlap_queries() {
        let maze = stock();
        // Centered inside an open tile.
        let open = Aabb::from_center(maze.nearest_tile_center(Vec2::new(9.5 * TILE_SIZE, 5.5 * TILE_SIZE)), Vec2::splat(30.0));
        assert!(!maze.is_wall_overlap(&open));
        // Poking into the left border wall.
        let poking = Aabb::new(Vec2::new(TILE_SIZE - 1.0, 5.0 * TILE_SIZE), Vec2::splat(30.0));
        assert!(maze.is_wall_overlap(&poking));
        // Flush against the border wall shares only an edge.
        let flush = Aabb::new(Vec2::new(TILE_SIZE, 5.0 * TILE_SIZE + 5.0), Vec2::splat(30.0));
        assert!(!maze.is_wall_overlap(&flush));
        // Partially outside the playfield fails closed.
        let outside = Aabb::new(Vec2::new(-1.0, 5.0 * TILE_SIZE), Vec2::splat(30.0));
        assert!(maze.is_wall_overlap(&outside));
    }

    #[test]
    fn test_nearest_tile_center() {
        let maze = stock();
        let center = maze.nearest_tile_center(Vec2::new(45.0, 79.0));
        assert_eq!(center, Vec2::new(60.0, 60.0));
        // A tile center maps to itself.
        assert_eq!(maze.nearest_tile_center(center), center);
    }

    #[test]
    fn test_tile_center_matches_rect() {
        let maze = stock();
        let rect = maze.tile_rect(3, 7);
        assert_eq!(maze.tile_center(3, 7), rect.center());
    }
}
