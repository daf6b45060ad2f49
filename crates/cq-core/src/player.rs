//! Player state
//!
//! Position, health, gold and attack power. Attack power is shown in the
//! status line and raised by the sword, but battles never read it.

use crate::errors::GameError;
use crate::map::Map;
use crate::{MAP_HEIGHT, MAP_WIDTH, START_ATTACK, START_GOLD, START_HP, START_POS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Column, 0..MAP_WIDTH
    pub x: usize,
    /// Row, 0..MAP_HEIGHT
    pub y: usize,
    /// Current hit points; may dip below zero after a lost battle
    pub hp: i32,
    pub hp_max: i32,
    pub gold: u32,
    pub attack: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            x: START_POS.0,
            y: START_POS.1,
            hp: START_HP,
            hp_max: START_HP,
            gold: START_GOLD,
            attack: START_ATTACK,
        }
    }

    pub fn pos(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Put the player at an explicit position
    pub fn place(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        if !Map::is_valid_pos(x as i32, y as i32) {
            return Err(GameError::OutOfBounds {
                x,
                y,
                width: MAP_WIDTH,
                height: MAP_HEIGHT,
            });
        }
        self.x = x;
        self.y = y;
        Ok(())
    }

    /// Step by (dx, dy). Returns false and leaves the position alone if the
    /// target is off the map.
    pub fn step(&mut self, dx: i32, dy: i32) -> bool {
        let nx = self.x as i32 + dx;
        let ny = self.y as i32 + dy;
        if !Map::is_valid_pos(nx, ny) {
            return false;
        }
        self.x = nx as usize;
        self.y = ny as usize;
        true
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }

    /// Heal up to the maximum
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount).min(self.hp_max);
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.hp -= amount;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}
