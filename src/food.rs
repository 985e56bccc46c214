//! Food placement: uniform random spawn on unoccupied cells.

use crate::geometry::Position;
use rand::Rng;

/// A single food item, or inactive when the board has no free cell.
///
/// Inactivity is permanent for a given game: the only way to fill the board
/// is to grow the snake over every cell, which ends the game in a win.
#[derive(Debug, Clone, Default)]
pub struct Food {
    position: Option<Position>,
}

impl Food {
    pub fn inactive() -> Self {
        Self { position: None }
    }

    /// Place the food uniformly at random on a free cell.
    ///
    /// Enumerates every cell in row-major order and picks from the free ones,
    /// rather than rejection-sampling random cells: enumeration terminates in
    /// bounded time and stays exactly uniform even when free cells are
    /// scarce. With no free cell the food becomes inactive.
    pub fn spawn<R: Rng>(
        &mut self,
        grid_size: i16,
        is_occupied: impl Fn(Position) -> bool,
        rng: &mut R,
    ) {
        debug_assert!(grid_size > 0, "grid must have at least one cell");

        let free: Vec<Position> = (0..grid_size)
            .flat_map(|y| (0..grid_size).map(move |x| Position::new(x, y)))
            .filter(|&pos| !is_occupied(pos))
            .collect();

        self.position = if free.is_empty() {
            None
        } else {
            Some(free[rng.gen_range(0..free.len())])
        };
    }

    /// True if the food is active and sits at `pos`.
    pub fn is_eaten_by(&self, pos: Position) -> bool {
        self.position == Some(pos)
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }
}
