//! Rendering surface and input abstraction
//!
//! The game only talks to a [`Frontend`]; the window backend lives in
//! [`window`], the drawing of game screens in [`scene`].

use async_trait::async_trait;

pub mod scene;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
    pub const RED: Rgba = Rgba::rgb(255, 0, 0);
    pub const GREEN: Rgba = Rgba::rgb(0, 255, 0);

    /// Opaque colour
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba(r, g, b, 255)
    }
}

/// Axis-aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Keys the game distinguishes.
///
/// Declaration order is the order keys pressed within one frame are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Escape,
    Other,
}

/// Input delivered by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    /// The window's close button was pressed
    CloseRequested,
}

/// A fixed-size drawable surface
pub trait Canvas {
    /// Fill the whole surface
    fn clear(&mut self, color: Rgba);

    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Rgba);

    /// Blit the background image scaled to the surface (black if none)
    fn draw_background(&mut self);

    /// Draw a single line of text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: u16, color: Rgba);

    /// Width and height of a rendered line of text
    fn text_size(&self, text: &str, size: u16) -> (f32, f32);
}

/// A canvas attached to a display and an input queue
#[async_trait(?Send)]
pub trait Frontend: Canvas {
    /// Drain input received since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    /// Show the frame drawn so far and wait for the next one
    async fn present(&mut self);
}
