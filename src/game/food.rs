//! Food entity - spawns randomly on the grid

use rand::Rng;

use super::position::{Grid, Position};

/// The food item on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    /// Position of the food
    pub position: Position,
}

impl Food {
    /// Create food at a random cell of the grid
    pub fn spawn<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Self::at(grid.random_cell(rng))
    }

    /// Create food at a specific position
    pub fn at(position: Position) -> Self {
        Self { position }
    }

    /// Respawn food at a new random cell.
    ///
    /// The snake body is not consulted, so food can land underneath it.
    pub fn respawn<R: Rng + ?Sized>(&mut self, grid: &Grid, rng: &mut R) {
        self.position = grid.random_cell(rng);
    }

    /// Check if a position matches the food position
    pub fn is_at(&self, pos: &Position) -> bool {
        self.position == *pos
    }
}
