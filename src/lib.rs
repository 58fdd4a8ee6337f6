pub mod board;
pub mod clock;
pub mod constants;
pub mod difficulty;
pub mod error;
pub mod explosion;
pub mod game;
pub mod layout;
pub mod menu;
pub mod render;
pub mod reveal;
pub mod screen;
pub mod title;

pub use board::{Board, Coord, Square};
pub use difficulty::{Difficulty, Profile};
pub use error::ConfigError;
pub use game::{Face, Game, Lifecycle};
