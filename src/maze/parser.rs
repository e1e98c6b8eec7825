//! Parsing of symbolic wall layouts into tile data.

use thiserror::Error;

/// Error type for layout parsing operations.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Unknown character in layout: {0:?}")]
    UnknownCharacter(char),
    #[error("Layout has no rows or no columns")]
    Empty,
    #[error("Row {row} has {found} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("Tile size must be positive, got {0}")]
    NonPositiveTileSize(f32),
}

/// One cell of the maze layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
}

/// Represents the validated data from a raw layout.
#[derive(Debug)]
pub struct ParsedLayout {
    /// Row-major tiles, row 0 at the top of the world.
    pub tiles: Vec<Tile>,
    pub rows: usize,
    pub cols: usize,
}

/// Parses a single character into a tile.
pub fn parse_character(c: char) -> Result<Tile, LayoutError> {
    match c {
        '#' => Ok(Tile::Wall),
        '.' | ' ' => Ok(Tile::Open),
        _ => Err(LayoutError::UnknownCharacter(c)),
    }
}

/// Parses a raw layout into tile data.
///
/// # Errors
///
/// Returns an error if the layout is empty, contains unknown characters, or
/// has rows of differing lengths. Rejecting ragged rows here keeps every
/// later tile query in bounds by construction.
pub fn parse_layout(raw_rows: &[&str]) -> Result<ParsedLayout, LayoutError> {
    let rows = raw_rows.len();
    if rows == 0 {
        return Err(LayoutError::Empty);
    }

    let cols = raw_rows[0].chars().count();
    if cols == 0 {
        return Err(LayoutError::Empty);
    }

    let mut tiles = Vec::with_capacity(rows * cols);
    for (row, line) in raw_rows.iter().enumerate() {
        let found = line.chars().count();
        if found != cols {
            return Err(LayoutError::RaggedRow {
                row,
                expected: cols,
                found,
            });
        }
        for character in line.chars() {
            tiles.push(parse_character(character)?);
        }
    }

    Ok(ParsedLayout { tiles, rows, cols })
}
