//! Difficulty presets
//!
//! The difficulty is picked once before the map is generated and controls
//! map density, how often the plains turn hostile and which monsters show up.

use core::str::FromStr;

use strum::{Display, EnumIter};

use crate::errors::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Difficulty {
    #[default]
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Number of forest tiles placed on the map
    pub const fn forest_count(self) -> usize {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Normal => 60,
            Difficulty::Hard => 80,
        }
    }

    /// Number of shop tiles placed on the map
    pub const fn shop_count(self) -> usize {
        match self {
            Difficulty::Easy => 3,
            Difficulty::Normal => 2,
            Difficulty::Hard => 1,
        }
    }

    /// Chance (percent) that a step onto plains starts a battle
    pub const fn plains_encounter_chance(self) -> u32 {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Normal => 15,
            Difficulty::Hard => 30,
        }
    }

    /// Menu number shown in the difficulty picker (1-based)
    pub const fn menu_number(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    /// Accepts a name (`easy`, `normal`, `hard`, any case) or a menu number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "easy" => Ok(Difficulty::Easy),
            "2" | "normal" => Ok(Difficulty::Normal),
            "3" | "hard" => Ok(Difficulty::Hard),
            _ => Err(GameError::UnknownDifficulty(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_presets() {
        assert_eq!(Difficulty::Easy.forest_count(), 40);
        assert_eq!(Difficulty::Normal.forest_count(), 60);
        assert_eq!(Difficulty::Hard.forest_count(), 80);
        assert_eq!(Difficulty::Easy.shop_count(), 3);
        assert_eq!(Difficulty::Normal.shop_count(), 2);
        assert_eq!(Difficulty::Hard.shop_count(), 1);
        assert_eq!(Difficulty::Easy.plains_encounter_chance(), 5);
        assert_eq!(Difficulty::Normal.plains_encounter_chance(), 15);
        assert_eq!(Difficulty::Hard.plains_encounter_chance(), 30);
    }

    #[test]
    fn test_parse_names_and_numbers() {
        for difficulty in Difficulty::iter() {
            let by_name: Difficulty = difficulty.to_string().parse().unwrap();
            let by_number: Difficulty = difficulty.menu_number().to_string().parse().unwrap();
            assert_eq!(by_name, difficulty);
            assert_eq!(by_number, difficulty);
        }
        assert_eq!(" HARD ".parse::<Difficulty>(), Ok(Difficulty::Hard));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "4".parse::<Difficulty>(),
            Err(GameError::UnknownDifficulty("4".to_string()))
        );
        assert!("nightmare".parse::<Difficulty>().is_err());
    }
}
