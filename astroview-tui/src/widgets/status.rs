//! Loading and error banners.

use crate::theme::SynthBruteTheme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct StatusIndicator {
    pub title: String,
    pub status: String,
    pub style: Style,
}

impl StatusIndicator {
    pub fn loading(what: &str, theme: &SynthBruteTheme) -> Self {
        Self {
            title: "Loading".to_string(),
            status: format!("Loading {}...", what),
            style: Style::default().fg(theme.primary_dim),
        }
    }

    pub fn error(message: &str, theme: &SynthBruteTheme) -> Self {
        Self {
            title: "Error".to_string(),
            status: message.to_string(),
            style: Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let paragraph = Paragraph::new(self.status.clone())
            .style(self.style)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(self.title.as_str())
                    .borders(Borders::ALL),
            );
        f.render_widget(paragraph, area);
    }
}
