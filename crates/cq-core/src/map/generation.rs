//! Map generation
//!
//! Scatters forests and shops over an all-plains grid, then plants the goal.

use log::debug;

use crate::difficulty::Difficulty;
use crate::rng::GameRng;
use crate::{GOAL_POS, MAP_HEIGHT, MAP_WIDTH, START_POS};

use super::{Map, Tile};

/// Generate the map for a difficulty
///
/// Forests are placed before shops. Both use counted rejection sampling:
/// a draw on the start, the goal or an already used cell is thrown away
/// and redrawn, so the requested counts are always met exactly.
pub fn generate(difficulty: Difficulty, rng: &mut GameRng) -> Map {
    let mut map = Map::new();

    scatter(&mut map, rng, Tile::Forest, difficulty.forest_count());
    scatter(&mut map, rng, Tile::Shop, difficulty.shop_count());

    map.set(GOAL_POS.0, GOAL_POS.1, Tile::Goal);

    debug!(
        "generated {} map: {} forests, {} shops (seed {})",
        difficulty,
        map.count(Tile::Forest),
        map.count(Tile::Shop),
        rng.seed()
    );
    map
}

/// Place `count` copies of `tile` on free plains
fn scatter(map: &mut Map, rng: &mut GameRng, tile: Tile, count: usize) {
    let mut placed = 0;
    while placed < count {
        let pos = rng.random_coord(MAP_WIDTH, MAP_HEIGHT);
        if pos == START_POS || pos == GOAL_POS || map.tile(pos.0, pos.1) != Tile::Plain {
            continue;
        }
        map.set(pos.0, pos.1, tile);
        placed += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_counts_per_difficulty() {
        for difficulty in Difficulty::iter() {
            let map = generate(difficulty, &mut GameRng::new(42));
            assert_eq!(map.count(Tile::Forest), difficulty.forest_count());
            assert_eq!(map.count(Tile::Shop), difficulty.shop_count());
            assert_eq!(map.count(Tile::Goal), 1);
        }
    }

    #[test]
    fn test_start_and_goal_fixed() {
        let map = generate(Difficulty::Hard, &mut GameRng::new(3));
        assert_eq!(map.tile(0, 0), Tile::Plain);
        assert_eq!(map.tile(19, 19), Tile::Goal);
    }

    #[test]
    fn test_same_seed_same_map() {
        let a = generate(Difficulty::Normal, &mut GameRng::new(1234));
        let b = generate(Difficulty::Normal, &mut GameRng::new(1234));
        assert_eq!(a, b);
    }
}
