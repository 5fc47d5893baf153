//! Grid positions and playfield bounds

use rand::Rng;

use super::direction::Direction;
use crate::config::{CELL_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH};

/// A position on the game grid, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Get the position adjacent to this one in the given direction.
    /// No wrapping: stepping off the grid yields an out-of-bounds position.
    pub fn adjacent(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        Position::new(self.x + dx, self.y + dy)
    }

    /// Top-left corner in pixels
    pub fn to_pixels(self) -> (f32, f32) {
        ((self.x * CELL_SIZE) as f32, (self.y * CELL_SIZE) as f32)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Size of the playfield in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cols: i32,
    pub rows: i32,
}

impl Grid {
    /// Create a grid of `cols` x `rows` cells
    pub fn new(cols: i32, rows: i32) -> Self {
        Self { cols, rows }
    }

    /// The grid covering the whole window
    pub fn window() -> Self {
        Self::new(WINDOW_WIDTH / CELL_SIZE, WINDOW_HEIGHT / CELL_SIZE)
    }

    /// Check whether a position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        (0..self.cols).contains(&pos.x) && (0..self.rows).contains(&pos.y)
    }

    /// Pick a random cell for food.
    ///
    /// The first column and row are skipped unless the grid is a single cell
    /// wide or tall along that axis.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        Position::new(pick_coord(self.cols, rng), pick_coord(self.rows, rng))
    }
}

fn pick_coord<R: Rng + ?Sized>(extent: i32, rng: &mut R) -> i32 {
    if extent > 1 {
        rng.gen_range(1..extent)
    } else {
        0
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_adjacent() {
        let pos = Position::new(10, 10);

        assert_eq!(pos.adjacent(Direction::Up), Position::new(10, 9));
        assert_eq!(pos.adjacent(Direction::Down), Position::new(10, 11));
        assert_eq!(pos.adjacent(Direction::Left), Position::new(9, 10));
        assert_eq!(pos.adjacent(Direction::Right), Position::new(11, 10));
    }

    #[test]
    fn test_no_wrap_around() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.adjacent(Direction::Left), Position::new(-1, 0));
        assert_eq!(corner.adjacent(Direction::Up), Position::new(0, -1));
    }

    #[test]
    fn test_window_grid() {
        assert_eq!(Grid::window(), Grid::new(72, 48));
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(5, 4);
        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(4, 3)));
        assert!(!grid.contains(Position::new(5, 0)));
        assert!(!grid.contains(Position::new(0, 4)));
        assert!(!grid.contains(Position::new(-1, 2)));
        assert!(!grid.contains(Position::new(2, -1)));
    }

    #[test]
    fn test_random_cell_in_bounds() {
        let grid = Grid::new(6, 5);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..500 {
            let cell = grid.random_cell(&mut rng);
            assert!(grid.contains(cell));
            assert!(cell.x >= 1 && cell.y >= 1);
        }
    }

    #[test]
    fn test_to_pixels() {
        assert_eq!(Position::new(11, 5).to_pixels(), (110.0, 50.0));
    }

    #[test]
    fn test_random_cell_on_narrow_grid() {
        let mut rng = StdRng::seed_from_u64(3);

        for grid in [Grid::new(1, 1), Grid::new(1, 6), Grid::new(6, 1)] {
            for _ in 0..50 {
                assert!(grid.contains(grid.random_cell(&mut rng)));
            }
        }
    }
}
