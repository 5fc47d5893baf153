//! Character-by-character text reveal

use std::time::Duration;

/// Phase of the reveal animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Revealing,
    Finished,
}

/// How the dialogue reacts to a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    /// Still typing; the key does nothing
    Ignored,
    /// Text fully shown; close the dialogue
    Dismiss,
}

/// Reveal state of one dialogue
#[derive(Debug, Clone)]
pub struct DialogueState {
    text: String,
    /// Number of characters in `text`
    length: usize,
    /// Characters currently shown
    revealed: usize,
    cadence: Duration,
    last_reveal: Duration,
    phase: Phase,
}

impl DialogueState {
    /// Start revealing `text` at time `now`, one character per `cadence`
    pub fn new(text: impl Into<String>, cadence: Duration, now: Duration) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self {
            text,
            length,
            revealed: 0,
            cadence,
            last_reveal: now,
            phase: if length == 0 {
                Phase::Finished
            } else {
                Phase::Revealing
            },
        }
    }

    /// Reveal one more character if a full cadence passed since the last one.
    /// Returns whether a character was revealed.
    pub fn advance(&mut self, now: Duration) -> bool {
        if self.phase == Phase::Finished || now.saturating_sub(self.last_reveal) < self.cadence {
            return false;
        }
        self.last_reveal = now;
        self.step();
        true
    }

    /// Reveal exactly one character
    pub fn step(&mut self) {
        if self.revealed < self.length {
            self.revealed += 1;
        }
        if self.revealed == self.length {
            self.phase = Phase::Finished;
        }
    }

    pub fn on_key_down(&self) -> KeyResponse {
        if self.is_finished() {
            KeyResponse::Dismiss
        } else {
            KeyResponse::Ignored
        }
    }

    /// The part of the text shown so far
    pub fn displayed(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.revealed)
            .map_or(self.text.len(), |(i, _)| i);
        &self.text[..end]
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}
