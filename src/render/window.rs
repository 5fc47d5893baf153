//! Macroquad window backend

use async_trait::async_trait;
use macroquad::color::Color;
use macroquad::input::{get_keys_pressed, is_quit_requested, prevent_quit, KeyCode};
use macroquad::math::vec2;
use macroquad::prelude::Conf;
use macroquad::shapes::{draw_rectangle, draw_rectangle_lines};
use macroquad::text::{draw_text, measure_text};
use macroquad::texture::{draw_texture_ex, DrawTextureParams, Image, Texture2D};
use macroquad::window::{clear_background, next_frame};

use super::{Canvas, Frontend, InputEvent, Key, Rect, Rgba};
use crate::config::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use crate::error::ResourceError;

/// Fixed-size, non-resizable game window
pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

/// Decode a background image; runs before the window exists
pub fn decode_background(path: &str, bytes: &[u8]) -> Result<Image, ResourceError> {
    Image::from_file_with_format(bytes, None)
        .map_err(|e| ResourceError::malformed(path, format!("{e:?}")))
}

/// Frontend drawing into the macroquad window
pub struct WindowFrontend {
    background: Option<Texture2D>,
}

impl WindowFrontend {
    /// Must be called from inside the macroquad event loop
    pub fn new(background: Option<&Image>) -> Self {
        // Close requests are delivered as events instead of ending the loop
        prevent_quit();
        Self {
            background: background.map(Texture2D::from_image),
        }
    }
}

fn color(c: Rgba) -> Color {
    Color::from_rgba(c.0, c.1, c.2, c.3)
}

fn key(code: KeyCode) -> Key {
    match code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::W => Key::W,
        KeyCode::A => Key::A,
        KeyCode::S => Key::S,
        KeyCode::D => Key::D,
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

/// Turn one frame of key presses into events.
///
/// macroquad hands over a frame's presses as an unordered set, so they are
/// sorted into `Key` order to keep "last key wins" reproducible.
fn frame_events<I>(pressed: I, quit_requested: bool) -> Vec<InputEvent>
where
    I: IntoIterator<Item = KeyCode>,
{
    let mut keys: Vec<Key> = pressed.into_iter().map(key).collect();
    keys.sort();

    let mut events: Vec<InputEvent> = keys.into_iter().map(InputEvent::KeyDown).collect();
    if quit_requested {
        events.push(InputEvent::CloseRequested);
    }
    events
}

impl Canvas for WindowFrontend {
    fn clear(&mut self, c: Rgba) {
        clear_background(color(c));
    }

    fn fill_rect(&mut self, rect: Rect, c: Rgba) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color(c));
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, c: Rgba) {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color(c));
    }

    fn draw_background(&mut self) {
        match &self.background {
            Some(texture) => {
                clear_background(color(Rgba::BLACK));
                draw_texture_ex(
                    texture,
                    0.0,
                    0.0,
                    color(Rgba::WHITE),
                    DrawTextureParams {
                        dest_size: Some(vec2(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)),
                        ..Default::default()
                    },
                );
            }
            None => clear_background(color(Rgba::BLACK)),
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: u16, c: Rgba) {
        // macroquad places text by its baseline
        let dims = measure_text(text, None, size, 1.0);
        draw_text(text, x, y + dims.offset_y, size as f32, color(c));
    }

    fn text_size(&self, text: &str, size: u16) -> (f32, f32) {
        let dims = measure_text(text, None, size, 1.0);
        (dims.width, dims.height)
    }
}

#[async_trait(?Send)]
impl Frontend for WindowFrontend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        frame_events(get_keys_pressed(), is_quit_requested())
    }

    async fn present(&mut self) {
        next_frame().await;
    }
}
