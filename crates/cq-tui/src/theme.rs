//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with --light flag
//! or CQ_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

use cq_core::map::Tile;

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,

    // Borders
    /// Default border color
    pub border: Color,
    /// Informational border (difficulty menu, victory)
    pub border_accent: Color,
    /// Prompt border (battle, shop)
    pub border_action: Color,
    /// Danger border (game over)
    pub border_danger: Color,

    // Interactive elements
    /// Selected/cursor item foreground
    pub cursor_fg: Color,
    /// Selected/cursor item background
    pub cursor_bg: Color,

    // Semantic colors
    /// Section headers, accent text
    pub accent: Color,
    /// Shop header and prices
    pub header: Color,
    /// Positive/good (battle won, purchase made)
    pub good: Color,
    /// Negative/bad (damage, death)
    pub bad: Color,

    // Map
    pub map_player: Color,
    pub map_plain: Color,
    pub map_forest: Color,
    pub map_shop: Color,
    pub map_goal: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            border_accent: Color::Cyan,
            border_action: Color::Yellow,
            border_danger: Color::Red,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            accent: Color::Cyan,
            header: Color::Yellow,
            good: Color::Green,
            bad: Color::Red,
            map_player: Color::Green,
            map_plain: Color::Gray,
            map_forest: Color::Red,
            map_shop: Color::Yellow,
            map_goal: Color::Cyan,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            border_action: Color::Yellow,
            border_danger: Color::Red,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            accent: Color::Blue,
            header: Color::Yellow,
            good: Color::Green,
            bad: Color::Red,
            map_player: Color::Green,
            map_plain: Color::DarkGray,
            map_forest: Color::Red,
            map_shop: Color::Magenta,
            map_goal: Color::Blue,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and CQ_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Foreground color for a map tile
    pub fn tile_color(&self, tile: Tile) -> Color {
        match tile {
            Tile::Plain => self.map_plain,
            Tile::Forest => self.map_forest,
            Tile::Shop => self.map_shop,
            Tile::Goal => self.map_goal,
        }
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("CQ_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is set by many terminals (xterm, rxvt, iTerm2, etc.)
        // Format: "fg;bg" where values are color indices (0-15)
        // Light backgrounds typically have bg index >= 7 (excluding 8 which is bright black)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
