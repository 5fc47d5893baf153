//! Keyboard mapping and per-tick input buffering

use crate::game::Direction;
use crate::render::Key;

/// What a key press asks the game to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Steer the snake
    Turn(Direction),
    /// Leave the game
    Quit,
}

impl Command {
    /// Map a key to a command; arrows and WASD steer, Escape quits
    pub fn from_key(key: Key) -> Option<Command> {
        match key {
            Key::Up | Key::W => Some(Command::Turn(Direction::Up)),
            Key::Down | Key::S => Some(Command::Turn(Direction::Down)),
            Key::Left | Key::A => Some(Command::Turn(Direction::Left)),
            Key::Right | Key::D => Some(Command::Turn(Direction::Right)),
            Key::Escape => Some(Command::Quit),
            Key::Other => None,
        }
    }
}

/// Direction requests collected between two ticks (last write wins)
#[derive(Debug, Default)]
pub struct InputBuffer {
    pending: Option<Direction>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a request, replacing any earlier one
    pub fn push(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Take the request for this tick
    pub fn take(&mut self) -> Option<Direction> {
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrows_and_wasd() {
        assert_eq!(Command::from_key(Key::Up), Some(Command::Turn(Direction::Up)));
        assert_eq!(Command::from_key(Key::W), Some(Command::Turn(Direction::Up)));
        assert_eq!(Command::from_key(Key::A), Some(Command::Turn(Direction::Left)));
        assert_eq!(Command::from_key(Key::S), Some(Command::Turn(Direction::Down)));
        assert_eq!(Command::from_key(Key::Right), Some(Command::Turn(Direction::Right)));
        assert_eq!(Command::from_key(Key::Escape), Some(Command::Quit));
        assert_eq!(Command::from_key(Key::Other), None);
    }

    #[test]
    fn test_last_write_wins() {
        let mut buffer = InputBuffer::new();
        buffer.push(Direction::Up);
        buffer.push(Direction::Left);

        assert_eq!(buffer.take(), Some(Direction::Left));
        assert_eq!(buffer.take(), None);
    }
}
