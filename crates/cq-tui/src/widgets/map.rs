//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use cq_core::map::Map;
use cq_core::player::Player;

use crate::display::GlyphSet;
use crate::theme::Theme;

/// Columns used per map cell
pub const CELL_WIDTH: u16 = 2;

/// Widget for rendering the overworld map
pub struct MapWidget<'a> {
    map: &'a Map,
    player: &'a Player,
    theme: &'a Theme,
    glyphs: &'a dyn GlyphSet,
}

impl<'a> MapWidget<'a> {
    pub fn new(map: &'a Map, player: &'a Player, theme: &'a Theme, glyphs: &'a dyn GlyphSet) -> Self {
        Self {
            map,
            player,
            theme,
            glyphs,
        }
    }

    fn cell_display(&self, x: usize, y: usize) -> (&'static str, Style) {
        if (x, y) == self.player.pos() {
            return (
                self.glyphs.player_glyph(),
                Style::default().fg(self.theme.map_player).bold(),
            );
        }
        let tile = self.map.tile(x, y);
        (
            self.glyphs.tile_glyph(tile),
            Style::default().fg(self.theme.tile_color(tile)),
        )
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title("ConsoleQuest");

        let inner = block.inner(area);
        block.render(area, buf);

        let max_cols = (inner.width / CELL_WIDTH) as usize;
        for (y, row) in self.map.rows().enumerate().take(inner.height as usize) {
            for x in 0..row.len().min(max_cols) {
                let (glyph, style) = self.cell_display(x, y);
                buf.set_string(
                    inner.x + x as u16 * CELL_WIDTH,
                    inner.y + y as u16,
                    glyph,
                    style,
                );
            }
        }
    }
}
