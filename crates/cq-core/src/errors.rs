//! Error types for the game core
//!
//! Only setup and API misuse are errors. In-game mistakes (bad battle input,
//! unknown shop selection, walking into the map edge) are ordinary outcomes.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("unknown difficulty '{0}' (expected easy, normal, hard or 1-3)")]
    UnknownDifficulty(String),

    #[error("position ({x}, {y}) is outside the {width}x{height} map")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
