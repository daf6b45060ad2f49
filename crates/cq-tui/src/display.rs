//! Glyph system for TUI rendering
//!
//! Provides support for both classic ASCII and fancy Unicode glyphs. Every
//! map cell is drawn two columns wide so the 20x20 grid looks square.

use cq_core::combat::MonsterKind;
use cq_core::map::Tile;
use strum::{Display, EnumString, VariantNames};

/// Available graphics modes for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GraphicsMode {
    /// Classic ASCII characters.
    Classic,
    /// Fancy Unicode characters.
    Fancy,
    /// Automatically detect support.
    #[default]
    Auto,
}

/// Set of glyphs used for rendering the map.
pub trait GlyphSet: Send + Sync {
    /// Two-column glyph for a map tile.
    fn tile_glyph(&self, tile: Tile) -> &'static str;

    /// Two-column glyph for the player.
    fn player_glyph(&self) -> &'static str;
}

/// Plain ASCII glyph set.
pub struct ClassicGlyphs;

impl GlyphSet for ClassicGlyphs {
    fn tile_glyph(&self, tile: Tile) -> &'static str {
        match tile {
            Tile::Plain => ". ",
            Tile::Forest => "T ",
            Tile::Shop => "$ ",
            Tile::Goal => "> ",
        }
    }

    fn player_glyph(&self) -> &'static str {
        "@ "
    }
}

/// Fancy Unicode glyph set.
pub struct FancyGlyphs;

impl GlyphSet for FancyGlyphs {
    fn tile_glyph(&self, tile: Tile) -> &'static str {
        match tile {
            Tile::Plain => "· ",
            Tile::Forest => "♣ ",
            Tile::Shop => "⌂ ",
            Tile::Goal => "★ ",
        }
    }

    fn player_glyph(&self) -> &'static str {
        "☺ "
    }
}

/// Detect if the terminal supports Unicode/UTF-8.
pub fn supports_unicode() -> bool {
    // Check LANG, LC_ALL, or LC_CTYPE for "UTF-8"
    let vars = ["LANG", "LC_ALL", "LC_CTYPE"];
    for var in vars {
        if let Ok(val) = std::env::var(var) {
            let val = val.to_uppercase();
            if val.contains("UTF-8") || val.contains("UTF8") {
                return true;
            }
        }
    }

    if let Ok(term) = std::env::var("TERM") {
        if term == "xterm-256color" || term == "alacritty" || term == "kitty" || term == "iterm" {
            return true;
        }
    }

    false
}

/// Returns the best available glyph set for the current environment.
pub fn detect_glyph_set(mode: GraphicsMode) -> Box<dyn GlyphSet> {
    match mode {
        GraphicsMode::Classic => Box::new(ClassicGlyphs),
        GraphicsMode::Fancy => Box::new(FancyGlyphs),
        GraphicsMode::Auto => {
            if supports_unicode() {
                Box::new(FancyGlyphs)
            } else {
                Box::new(ClassicGlyphs)
            }
        }
    }
}

/// ASCII portrait shown when a monster appears.
pub fn monster_art(kind: MonsterKind) -> &'static [&'static str] {
    match kind {
        MonsterKind::Slime => &[
            r"      .-^-.     ",
            r"    .'  o o'.   ",
            r"   /    ___  \  ",
            r"  (___________) ",
        ],
        MonsterKind::Goblin => &[
            r"   /\ ___ /\    ",
            r"   \ (o.o) /    ",
            r"     / V \      ",
            r"    /(   )\     ",
            r"     ^^ ^^      ",
        ],
        MonsterKind::Orc => &[
            r"     _____      ",
            r"    / o o \     ",
            r"   |  \_/  |==| ",
            r"   /|_____|\  | ",
            r"    |  |  |     ",
            r"   _|  |  |_    ",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_graphics_mode_parse() {
        assert_eq!("classic".parse::<GraphicsMode>(), Ok(GraphicsMode::Classic));
        assert_eq!("fancy".parse::<GraphicsMode>(), Ok(GraphicsMode::Fancy));
        assert_eq!(GraphicsMode::default(), GraphicsMode::Auto);
        assert!("neon".parse::<GraphicsMode>().is_err());
    }

    #[test]
    fn test_glyphs_are_two_columns() {
        let sets: [&dyn GlyphSet; 2] = [&ClassicGlyphs, &FancyGlyphs];
        for set in sets {
            assert_eq!(set.player_glyph().chars().count(), 2);
            for tile in Tile::iter() {
                assert_eq!(set.tile_glyph(tile).chars().count(), 2);
            }
        }
    }

    #[test]
    fn test_classic_glyphs_match_tile_symbols() {
        for tile in Tile::iter() {
            assert!(ClassicGlyphs.tile_glyph(tile).starts_with(tile.symbol()));
        }
    }

    #[test]
    fn test_every_monster_has_art() {
        for kind in MonsterKind::iter() {
            assert!(!monster_art(kind).is_empty());
        }
    }
}
