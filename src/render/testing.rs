//! Scripted frontend for tests

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;

use super::{Canvas, Frontend, InputEvent, Rect, Rgba};
use crate::clock::ManualClock;

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawOp {
    Clear(Rgba),
    FillRect(Rect, Rgba),
    StrokeRect(Rect, f32, Rgba),
    Background,
    Text(String, f32, f32, u16, Rgba),
}

/// Frontend that replays scripted input and advances a manual clock by one
/// frame on every `present`
pub(crate) struct FakeFrontend {
    clock: ManualClock,
    frame_time: Duration,
    script: VecDeque<Vec<InputEvent>>,
    every_frame: Vec<InputEvent>,
    ops: Vec<DrawOp>,
    frames: Vec<Vec<DrawOp>>,
    history: Vec<String>,
    presented: usize,
}

impl FakeFrontend {
    pub(crate) fn new() -> Self {
        Self::with_clock(ManualClock::new())
    }

    pub(crate) fn with_clock(clock: ManualClock) -> Self {
        Self {
            clock,
            frame_time: Duration::from_nanos(1_000_000_000 / 60),
            script: VecDeque::new(),
            every_frame: Vec::new(),
            ops: Vec::new(),
            frames: Vec::new(),
            history: Vec::new(),
            presented: 0,
        }
    }

    /// Events returned by successive polls, one entry per frame
    pub(crate) fn script(mut self, frames: Vec<Vec<InputEvent>>) -> Self {
        self.script = frames.into();
        self
    }

    /// Events returned on every poll after the script
    pub(crate) fn every_frame(mut self, events: Vec<InputEvent>) -> Self {
        self.every_frame = events;
        self
    }

    /// Drawing calls since the last `present`
    pub(crate) fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drawing calls of the last presented frame
    pub(crate) fn last_frame(&self) -> &[DrawOp] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Drawing calls of every presented frame, oldest first
    pub(crate) fn frames(&self) -> &[Vec<DrawOp>] {
        &self.frames
    }

    /// Text drawn since the last `present`
    pub(crate) fn texts(&self) -> Vec<String> {
        texts_of(&self.ops)
    }

    /// Every line of text presented so far, consecutive repeats collapsed
    pub(crate) fn history(&self) -> &[String] {
        &self.history
    }

    pub(crate) fn presented(&self) -> usize {
        self.presented
    }
}

/// Text content of a list of drawing calls
pub(crate) fn texts_of(ops: &[DrawOp]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::Text(text, ..) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

impl Canvas for FakeFrontend {
    fn clear(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.ops.push(DrawOp::FillRect(rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Rgba) {
        self.ops.push(DrawOp::StrokeRect(rect, thickness, color));
    }

    fn draw_background(&mut self) {
        self.ops.push(DrawOp::Background);
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, size: u16, color: Rgba) {
        self.ops.push(DrawOp::Text(text.to_string(), x, y, size, color));
    }

    fn text_size(&self, text: &str, size: u16) -> (f32, f32) {
        // Monospace: half the font size per character
        (text.chars().count() as f32 * size as f32 / 2.0, size as f32)
    }
}

#[async_trait(?Send)]
impl Frontend for FakeFrontend {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.script
            .pop_front()
            .unwrap_or_else(|| self.every_frame.clone())
    }

    async fn present(&mut self) {
        for text in texts_of(&self.ops) {
            if self.history.last() != Some(&text) {
                self.history.push(text);
            }
        }
        self.frames.push(std::mem::take(&mut self.ops));
        self.presented += 1;
        self.clock.advance(self.frame_time);
    }
}
