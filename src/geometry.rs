//! Grid geometry primitives: positions and the four cardinal directions.

/// A position on the grid. 0-indexed; valid cells are `[0, GRID_SIZE)` on
/// both axes, but out-of-range values are representable (a dead snake's head
/// may sit one cell past a wall).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The cell one step away in the given direction.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True if this cell lies inside a square grid of the given size.
    pub fn in_bounds(self, grid_size: i16) -> bool {
        self.x >= 0 && self.x < grid_size && self.y >= 0 && self.y < grid_size
    }
}

/// Cardinal direction for snake movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction. The four variants form two disjoint
    /// pairs: {Up, Down} and {Left, Right}.
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the (dx, dy) unit delta for this direction.
    pub fn delta(self) -> (i16, i16) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_opposite() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_step() {
        let p = Position::new(5, 5);
        assert_eq!(p.step(Direction::Right), Position::new(6, 5));
        assert_eq!(p.step(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Position::new(0, 0).in_bounds(10));
        assert!(Position::new(9, 9).in_bounds(10));
        assert!(!Position::new(-1, 0).in_bounds(10));
        assert!(!Position::new(0, 10).in_bounds(10));
    }
}
