//! Tile events
//!
//! Decides what happens when the player arrives on a tile.

use log::debug;

use crate::FOREST_ENCOUNTER_CHANCE;
use crate::difficulty::Difficulty;
use crate::map::Tile;
use crate::rng::GameRng;

/// What arriving on a tile triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Battle,
    Shop,
    Win,
}

/// Resolve the effect of arriving on `tile`
///
/// Always consumes exactly one percentage roll, even for tiles whose effect
/// is fixed.
pub fn on_arrive(tile: Tile, difficulty: Difficulty, rng: &mut GameRng) -> Effect {
    let roll = rng.percent_roll();
    let effect = match tile {
        Tile::Forest if roll < FOREST_ENCOUNTER_CHANCE => Effect::Battle,
        Tile::Plain if roll < difficulty.plains_encounter_chance() => Effect::Battle,
        Tile::Forest | Tile::Plain => Effect::None,
        Tile::Shop => Effect::Shop,
        Tile::Goal => Effect::Win,
    };
    debug!("arrived on {} (roll {}): {:?}", tile, roll, effect);
    effect
}
