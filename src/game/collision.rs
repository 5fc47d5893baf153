//! Collision detection logic

use super::position::Grid;
use super::snake::Snake;

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// Head left the playfield
    Wall,
    /// Head landed on another segment
    SelfBite,
}

/// Check the snake's head against the walls and its own body.
/// Walls are checked first.
pub fn check_collision(snake: &Snake, grid: &Grid) -> Option<Collision> {
    if !grid.contains(snake.head()) {
        Some(Collision::Wall)
    } else if snake.bites_itself() {
        Some(Collision::SelfBite)
    } else {
        None
    }
}
