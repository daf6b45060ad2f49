//! cq-tui: Terminal UI layer using ratatui
//!
//! Provides the terminal interface for ConsoleQuest.

pub mod app;
pub mod display;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{App, UiMode};
pub use display::GraphicsMode;
pub use theme::Theme;
