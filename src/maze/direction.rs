use glam::Vec2;

/// An axis-aligned movement direction in a Y-up world.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Up,
    Down,
}

impl Direction {
    /// The fixed enumeration order used everywhere candidates are ranked.
    /// Ties between equally good candidates go to the earlier entry, which
    /// keeps direction choices deterministic.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Right, Direction::Left, Direction::Up, Direction::Down];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn as_vec2(self) -> Vec2 {
        self.into()
    }
}

impl From<Direction> for Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Right => Vec2::X,
            Direction::Left => -Vec2::X,
            Direction::Up => Vec2::Y,
            Direction::Down => -Vec2::Y,
        }
    }
}
