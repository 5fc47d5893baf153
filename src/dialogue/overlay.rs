//! Modal story dialogue drawn over the playfield

use tracing::debug;

use super::typewriter::{DialogueState, KeyResponse};
use super::wrap::wrap;
use crate::clock::Clock;
use crate::config::{
    DIALOGUE_BORDER, DIALOGUE_BOX, DIALOGUE_FONT_SIZE, DIALOGUE_PADDING, DIALOGUE_WRAP_COLUMNS,
    TYPEWRITER_CADENCE, WINDOW_HEIGHT, WINDOW_WIDTH,
};
use crate::game::GameState;
use crate::render::{scene, Canvas, Frontend, InputEvent, Rect, Rgba};
use crate::state::AppContext;

/// Translucent grey laid over the whole window
const SCRIM: Rgba = Rgba(30, 30, 30, 128);

/// How the dialogue ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogueExit {
    /// The player pressed a key after the text was fully shown
    Dismissed,
    /// The window was closed
    Closed,
}

/// Run the dialogue until it is dismissed or the window closes.
///
/// The game does not advance while this runs; `game` is only drawn as the
/// backdrop.
pub async fn show_dialogue<F, C>(
    ctx: &mut AppContext<F, C>,
    game: &GameState,
    text: &str,
) -> DialogueExit
where
    F: Frontend,
    C: Clock,
{
    debug!(text, "Showing dialogue");
    let mut dialogue = DialogueState::new(text, TYPEWRITER_CADENCE, ctx.clock.now());

    loop {
        for event in ctx.frontend.poll_events() {
            match event {
                InputEvent::CloseRequested => return DialogueExit::Closed,
                InputEvent::KeyDown(_) => {
                    if dialogue.on_key_down() == KeyResponse::Dismiss {
                        return DialogueExit::Dismissed;
                    }
                }
            }
        }

        dialogue.advance(ctx.clock.now());

        scene::draw_playfield(&mut ctx.frontend, game);
        draw_dialogue(&mut ctx.frontend, dialogue.displayed());
        ctx.frontend.present().await;
    }
}

/// Scrim plus the bordered text box
pub fn draw_dialogue<C: Canvas + ?Sized>(canvas: &mut C, text: &str) {
    canvas.fill_rect(
        Rect::new(0.0, 0.0, WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32),
        SCRIM,
    );

    let (x, y, w, h) = DIALOGUE_BOX;
    let bounds = Rect::new(x, y, w, h);
    canvas.fill_rect(bounds, Rgba::BLACK);
    canvas.stroke_rect(bounds, DIALOGUE_BORDER, Rgba::WHITE);

    let line_height = DIALOGUE_FONT_SIZE as f32;
    for (i, line) in wrap(text, DIALOGUE_WRAP_COLUMNS).iter().enumerate() {
        canvas.draw_text(
            line,
            bounds.x + DIALOGUE_PADDING,
            bounds.y + DIALOGUE_PADDING + i as f32 * line_height,
            DIALOGUE_FONT_SIZE,
            Rgba::WHITE,
        );
    }
}
