//! Status panel widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use cq_core::GameState;

use crate::theme::Theme;

/// Widget for rendering the status panel under the map
pub struct StatusWidget<'a> {
    state: &'a GameState,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(state: &'a GameState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = &self.state.player;

        // Line 1: HP, gold, attack, difficulty
        let hp_color = if p.hp * 10 <= p.hp_max * 3 {
            self.theme.bad
        } else {
            self.theme.good
        };
        let line1 = Line::from(vec![
            Span::raw("HP: "),
            Span::styled(format!("{}/{}", p.hp.max(0), p.hp_max), Style::default().fg(hp_color)),
            Span::raw(format!(
                " | Gold: {}G | Attack: {} | Difficulty: {}",
                p.gold, p.attack, self.state.difficulty
            )),
        ])
        .style(Style::default().fg(self.theme.text));

        // Line 2: controls
        let line2 = Line::styled(
            "Arrows/hjkl/WASD: move | q: quit",
            Style::default().fg(self.theme.text_dim),
        );

        // Line 3: where the player is standing
        let line3 = Line::styled(
            self.state.current_tile().description(),
            Style::default().fg(self.theme.accent),
        );

        for (i, line) in [line1, line2, line3].iter().enumerate() {
            if (i as u16) < area.height {
                buf.set_line(area.x, area.y + i as u16, line, area.width);
            }
        }
    }
}
