//! Core game constants
//!
//! Map geometry and the player's starting stats.

/// Map dimensions
pub const MAP_WIDTH: usize = 20;
pub const MAP_HEIGHT: usize = 20;

/// Player start position (x, y)
pub const START_POS: (usize, usize) = (0, 0);

/// Goal position (x, y), always the bottom-right corner
pub const GOAL_POS: (usize, usize) = (MAP_WIDTH - 1, MAP_HEIGHT - 1);

/// Starting player stats
pub const START_HP: i32 = 100;
pub const START_GOLD: u32 = 0;
pub const START_ATTACK: u32 = 10;

/// Chance (percent) that stepping into a forest starts a battle,
/// independent of difficulty.
pub const FOREST_ENCOUNTER_CHANCE: u32 = 30;
