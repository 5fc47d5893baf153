//! Story dialogue: typewriter reveal, wrapping and the modal overlay

pub mod overlay;
pub mod typewriter;
pub mod wrap;

pub use overlay::{show_dialogue, DialogueExit};
