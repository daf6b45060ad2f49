//! Overworld map
//!
//! A fixed 20x20 grid of tiles. Cells are stored row-major and addressed
//! as (x, y), where x is the column and y the row.

mod generation;

pub use generation::generate;

use strum::{Display, EnumIter};

use crate::{MAP_HEIGHT, MAP_WIDTH};

/// Tile kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Tile {
    #[default]
    Plain,
    Forest,
    Shop,
    Goal,
}

impl Tile {
    /// Status panel description for a player standing on this tile
    pub const fn description(self) -> &'static str {
        match self {
            Tile::Plain => "Open plains. Monsters may jump out if you let your guard down.",
            Tile::Forest => "A gloomy forest... something is lurking here!",
            Tile::Shop => "A shop. You can buy things here.",
            Tile::Goal => "You reached the destination!",
        }
    }

    /// ASCII symbol for the tile
    pub const fn symbol(self) -> char {
        match self {
            Tile::Plain => '.',
            Tile::Forest => 'T',
            Tile::Shop => '$',
            Tile::Goal => '>',
        }
    }
}

/// The game map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    cells: [[Tile; MAP_WIDTH]; MAP_HEIGHT],
}

impl Map {
    /// An all-plains map
    pub fn new() -> Self {
        Self {
            cells: [[Tile::Plain; MAP_WIDTH]; MAP_HEIGHT],
        }
    }

    /// Check if a position is on the map
    pub fn is_valid_pos(x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < MAP_WIDTH && (y as usize) < MAP_HEIGHT
    }

    /// Tile at position
    ///
    /// Panics if the position is off the map; use [`Map::get`] for unchecked input.
    pub fn tile(&self, x: usize, y: usize) -> Tile {
        self.cells[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, tile: Tile) {
        self.cells[y][x] = tile;
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile; MAP_WIDTH]> {
        self.cells.iter()
    }

    /// Number of cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&t| t == tile)
            .count()
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_map_is_all_plains() {
        let map = Map::new();
        assert_eq!(map.count(Tile::Plain), MAP_WIDTH * MAP_HEIGHT);
    }

    #[test]
    fn test_set_and_get_are_row_major() {
        let mut map = Map::new();
        map.set(3, 7, Tile::Shop);
        assert_eq!(map.tile(3, 7), Tile::Shop);
        assert_eq!(map.tile(7, 3), Tile::Plain);
        assert_eq!(map.rows().nth(7).map(|row| row[3]), Some(Tile::Shop));
    }

    #[test]
    fn test_bounds() {
        assert!(Map::is_valid_pos(0, 0));
        assert!(Map::is_valid_pos(19, 19));
        assert!(!Map::is_valid_pos(-1, 0));
        assert!(!Map::is_valid_pos(0, 20));
    }
}
