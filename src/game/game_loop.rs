//! Game loop - polls input, ticks the game and shows story dialogues

use rand::Rng;
use tracing::{debug, info};

use super::state::{GameState, TickResult};
use crate::assets::Story;
use crate::clock::Clock;
use crate::config::GAME_OVER_HOLD;
use crate::dialogue::{show_dialogue, DialogueExit};
use crate::input::{Command, InputBuffer};
use crate::render::{scene, Frontend, InputEvent};
use crate::state::AppContext;

/// Why the game loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Window closed or Escape pressed
    Closed,
    /// The snake crashed and the final screen was shown
    GameOver { score: u32 },
}

/// Run one game until the snake crashes or the player leaves.
///
/// The story's first line is shown before the first move, then one line per
/// food eaten.
pub async fn run_game<F, C, R>(
    ctx: &mut AppContext<F, C>,
    game: &mut GameState,
    story: &Story,
    rng: &mut R,
) -> Outcome
where
    F: Frontend,
    C: Clock,
    R: Rng + ?Sized,
{
    info!("Game loop started (tick every {:?})", ctx.tick_interval);

    if show_dialogue(ctx, game, &game.story_line(story)).await == DialogueExit::Closed {
        return Outcome::Closed;
    }

    let mut input = InputBuffer::new();
    let mut last_tick = ctx.clock.now();

    loop {
        for event in ctx.frontend.poll_events() {
            match event {
                InputEvent::CloseRequested => return Outcome::Closed,
                InputEvent::KeyDown(key) => match Command::from_key(key) {
                    Some(Command::Quit) => return Outcome::Closed,
                    Some(Command::Turn(direction)) => input.push(direction),
                    None => {}
                },
            }
        }

        let now = ctx.clock.now();
        if now.saturating_sub(last_tick) >= ctx.tick_interval {
            last_tick = now;

            match game.tick(input.take(), rng) {
                TickResult::Continue => {}
                TickResult::FoodEaten => {
                    debug!(score = game.score(), "Food eaten");
                    let line = game.story_line(story);
                    if show_dialogue(ctx, game, &line).await == DialogueExit::Closed {
                        return Outcome::Closed;
                    }
                    if game.is_over() {
                        info!(score = game.score(), direction = ?game.direction(), "Game over");
                        return hold_game_over(ctx, game.score()).await;
                    }
                    // Reading time does not count toward the next tick
                    last_tick = ctx.clock.now();
                }
                TickResult::GameOver => {
                    info!(score = game.score(), direction = ?game.direction(), "Game over");
                    return hold_game_over(ctx, game.score()).await;
                }
            }
        }

        scene::draw_frame(&mut ctx.frontend, game);
        ctx.frontend.present().await;
    }
}

/// Keep the final screen up for `GAME_OVER_HOLD`
async fn hold_game_over<F, C>(ctx: &mut AppContext<F, C>, score: u32) -> Outcome
where
    F: Frontend,
    C: Clock,
{
    let start = ctx.clock.now();

    while ctx.clock.now().saturating_sub(start) < GAME_OVER_HOLD {
        if ctx.frontend.poll_events().contains(&InputEvent::CloseRequested) {
            return Outcome::Closed;
        }
        scene::draw_game_over(&mut ctx.frontend, score);
        ctx.frontend.present().await;
    }

    Outcome::GameOver { score }
}
