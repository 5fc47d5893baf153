//! Game module

pub mod collision;
pub mod direction;
pub mod food;
pub mod game_loop;
pub mod position;
pub mod snake;
pub mod state;

pub use direction::Direction;
pub use position::{Grid, Position};
pub use state::GameState;
