//! Snake entity with movement logic

use std::collections::VecDeque;

use super::direction::Direction;
use super::position::Position;
use crate::config::INITIAL_SNAKE;

/// The player's snake
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Current movement direction
    direction: Direction,
    /// Snake body segments (head is front, tail is back)
    body: VecDeque<Position>,
}

impl Snake {
    /// Create the snake at its starting position, heading right
    pub fn new() -> Self {
        Self::from_segments(INITIAL_SNAKE.map(Position::from), Direction::Right)
    }

    /// Create a snake from explicit segments, head first
    ///
    /// # Panics
    /// Panics if `segments` is empty.
    pub fn from_segments<I>(segments: I, direction: Direction) -> Self
    where
        I: IntoIterator<Item = Position>,
    {
        let body: VecDeque<Position> = segments.into_iter().collect();
        assert!(!body.is_empty(), "Snake must have a head");
        Self { direction, body }
    }

    /// Get the snake's head position
    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake must have a head")
    }

    /// Get all body positions, head first
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Get the current direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Set the snake's direction (prevents 180-degree turns).
    /// Returns whether the direction was accepted.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if self.direction.is_opposite(&new_direction) {
            return false;
        }
        self.direction = new_direction;
        true
    }

    /// Push a new head one cell ahead and return it.
    /// The tail stays in place until `shed_tail` is called.
    pub fn slither(&mut self) -> Position {
        let new_head = self.head().adjacent(self.direction);
        self.body.push_front(new_head);
        new_head
    }

    /// Drop the last segment
    pub fn shed_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }

    /// Check whether the head overlaps any other segment
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snake() {
        let snake = Snake::new();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(10, 5));
        assert_eq!(snake.direction(), Direction::Right);
    }

    #[test]
    fn test_set_direction() {
        let mut snake = Snake::new();

        // Should not reverse
        assert!(!snake.set_direction(Direction::Left));
        assert_eq!(snake.direction(), Direction::Right);

        // Can turn 90 degrees
        assert!(snake.set_direction(Direction::Up));
        assert_eq!(snake.direction(), Direction::Up);

        assert!(!snake.set_direction(Direction::Down));
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_slither_and_shed() {
        let mut snake = Snake::new();

        assert_eq!(snake.slither(), Position::new(11, 5));
        assert_eq!(snake.len(), 4);

        snake.shed_tail();
        let body: Vec<_> = snake.body().iter().copied().collect();
        assert_eq!(
            body,
            vec![Position::new(11, 5), Position::new(10, 5), Position::new(9, 5)]
        );
    }

    #[test]
    fn test_bites_itself() {
        let snake = Snake::from_segments(
            [(2, 2), (3, 2), (3, 3), (2, 3), (2, 2)].map(Position::from),
            Direction::Up,
        );
        assert!(snake.bites_itself());
        assert!(!Snake::new().bites_itself());
    }
}
