//! Random number generation
//!
//! Uses a seeded ChaCha RNG so a session can be replayed from its seed.

use core::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation. Every draw
/// the game makes is a uniform integer from a half-open range.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform draw from `range.start..range.end`
    ///
    /// Returns `range.start` if the range is empty.
    pub fn range(&mut self, range: Range<i32>) -> i32 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.gen_range(range)
    }

    /// A percentage roll in 0..100
    pub fn percent_roll(&mut self) -> u32 {
        self.rn2(100)
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.percent_roll() < percent
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }

    /// Generate a random coordinate within bounds, x first
    pub fn random_coord(&mut self, max_x: usize, max_y: usize) -> (usize, usize) {
        let x = self.rn2(max_x as u32) as usize;
        let y = self.rn2(max_y as u32) as usize;
        (x, y)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
