//! Message display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

use crate::theme::Theme;

/// Widget for rendering messages
pub struct MessagesWidget<'a> {
    messages: &'a [String],
    theme: &'a Theme,
}

impl<'a> MessagesWidget<'a> {
    pub fn new(messages: &'a [String], theme: &'a Theme) -> Self {
        Self { messages, theme }
    }
}

impl Widget for MessagesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.messages.join("  ");

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(self.theme.text))
            .block(Block::default().borders(Borders::TOP))
            .wrap(Wrap { trim: true });

        paragraph.render(area, buf);
    }
}
