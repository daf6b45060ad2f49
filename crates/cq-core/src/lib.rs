//! cq-core: Core game logic for ConsoleQuest
//!
//! This crate contains all game logic with no I/O dependencies.
//! It is designed to be pure and testable: the terminal front end feeds
//! [`Command`]s into a [`GameLoop`] and renders the resulting [`GameState`].

pub mod combat;
pub mod difficulty;
pub mod encounter;
pub mod map;
pub mod player;
pub mod shop;

mod consts;
mod errors;
mod gameloop;
mod rng;

pub use consts::*;
pub use difficulty::Difficulty;
pub use errors::GameError;
pub use gameloop::{Command, Direction, GameLoop, GameLoopResult, GameState, Phase};
pub use rng::GameRng;
