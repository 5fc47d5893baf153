//! Game state - advances one step per tick

use rand::Rng;
use tracing::debug;

use super::collision::check_collision;
use super::direction::Direction;
use super::food::Food;
use super::position::{Grid, Position};
use super::snake::Snake;
use crate::assets::Story;

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    /// The snake moved
    Continue,
    /// The snake moved onto the food and grew. The same move may also have
    /// ended the game; check `is_over` after handling the food.
    FoodEaten,
    /// The snake hit a wall or itself without eating; terminal
    GameOver,
}

/// Single-player game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Food,
    /// Last requested direction; kept across ticks until replaced
    requested: Direction,
    score: u32,
    over: bool,
}

impl GameState {
    /// Start a new game on `grid` with food at a random cell
    pub fn new<R: Rng + ?Sized>(grid: Grid, rng: &mut R) -> Self {
        let food = Food::spawn(&grid, rng);
        Self::with_layout(grid, Snake::new(), food)
    }

    /// Start from an explicit snake and food placement
    pub fn with_layout(grid: Grid, snake: Snake, food: Food) -> Self {
        Self {
            grid,
            requested: snake.direction(),
            snake,
            food,
            score: 0,
            over: false,
        }
    }

    /// Record a direction request; last write wins until the next tick
    pub fn request_direction(&mut self, direction: Direction) {
        self.requested = direction;
    }

    /// Advance the game by one step.
    ///
    /// `request` replaces the pending direction request when present. The
    /// reversal guard is checked against the last effective direction.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        request: Option<Direction>,
        rng: &mut R,
    ) -> TickResult {
        if self.over {
            return TickResult::GameOver;
        }

        if let Some(direction) = request {
            self.request_direction(direction);
        }
        self.snake.set_direction(self.requested);

        let head = self.snake.slither();

        let ate = self.food.is_at(&head);
        if ate {
            self.score += 1;
            self.food.respawn(&self.grid, rng);
            debug!(
                score = self.score,
                length = self.snake.len(),
                food = ?self.food.position,
                "Snake ate food"
            );
        } else {
            self.snake.shed_tail();
        }

        if let Some(collision) = check_collision(&self.snake, &self.grid) {
            debug!(?collision, ?head, score = self.score, "Game over");
            self.over = true;
        }

        match (ate, self.over) {
            (true, _) => TickResult::FoodEaten,
            (false, true) => TickResult::GameOver,
            (false, false) => TickResult::Continue,
        }
    }

    /// The snake
    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Current food position
    pub fn food(&self) -> Position {
        self.food.position
    }

    /// Effective direction of the last tick
    pub fn direction(&self) -> Direction {
        self.snake.direction()
    }

    /// Food eaten so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the game has ended
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Dialogue text for the current score
    pub fn story_line(&self, story: &Story) -> String {
        story.line_for(self.score)
    }
}
