//! Game screens: playfield, score and the final screen

use super::{Canvas, Rect, Rgba};
use crate::config::{
    CELL_SIZE, GAME_OVER_FONT_SIZE, GAME_OVER_TEXT, SCORE_FONT_SIZE, SCORE_LABEL, WINDOW_HEIGHT,
    WINDOW_WIDTH,
};
use crate::game::{GameState, Position};

/// Where and how the score is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreDisplay {
    /// Small label near the top-left while playing
    Hud,
    /// Centered label on the game over screen
    Summary,
}

impl ScoreDisplay {
    fn color(self) -> Rgba {
        match self {
            ScoreDisplay::Hud => Rgba::WHITE,
            ScoreDisplay::Summary => Rgba::RED,
        }
    }

    /// Mid-top anchor point
    fn anchor(self) -> (f32, f32) {
        match self {
            ScoreDisplay::Hud => ((WINDOW_WIDTH / CELL_SIZE) as f32, 15.0),
            ScoreDisplay::Summary => (WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 1.25),
        }
    }
}

fn cell_rect(pos: Position) -> Rect {
    let (x, y) = pos.to_pixels();
    Rect::new(x, y, CELL_SIZE as f32, CELL_SIZE as f32)
}

/// Draw text horizontally centered on `x`, with its top at `y`
fn draw_text_midtop<C: Canvas + ?Sized>(
    canvas: &mut C,
    text: &str,
    (x, y): (f32, f32),
    size: u16,
    color: Rgba,
) {
    let (width, _) = canvas.text_size(text, size);
    canvas.draw_text(text, x - width / 2.0, y, size, color);
}

/// Background, snake and food
pub fn draw_playfield<C: Canvas + ?Sized>(canvas: &mut C, game: &GameState) {
    canvas.draw_background();

    for segment in game.snake().body() {
        canvas.fill_rect(cell_rect(*segment), Rgba::GREEN);
    }

    canvas.fill_rect(cell_rect(game.food()), Rgba::WHITE);
}

pub fn draw_score<C: Canvas + ?Sized>(canvas: &mut C, score: u32, display: ScoreDisplay) {
    let label = format!("{SCORE_LABEL}{score}");
    draw_text_midtop(canvas, &label, display.anchor(), SCORE_FONT_SIZE, display.color());
}

/// One frame of normal play
pub fn draw_frame<C: Canvas + ?Sized>(canvas: &mut C, game: &GameState) {
    draw_playfield(canvas, game);
    draw_score(canvas, game.score(), ScoreDisplay::Hud);
}

/// Final screen shown after a collision
pub fn draw_game_over<C: Canvas + ?Sized>(canvas: &mut C, score: u32) {
    canvas.clear(Rgba::BLACK);
    draw_text_midtop(
        canvas,
        GAME_OVER_TEXT,
        (WINDOW_WIDTH as f32 / 2.0, WINDOW_HEIGHT as f32 / 4.0),
        GAME_OVER_FONT_SIZE,
        Rgba::RED,
    );
    draw_score(canvas, score, ScoreDisplay::Summary);
}
