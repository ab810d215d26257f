//! One-line bar of options with a single highlighted entry. Used for the
//! panel tabs and the mission position indicator.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct SelectorOption {
    pub label: String,
    pub active: bool,
}

impl SelectorOption {
    /// Options from labels, marking the one at `active`.
    pub fn from_labels<I, S>(labels: I, active: usize) -> Vec<SelectorOption>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| SelectorOption {
                label: label.into(),
                active: index == active,
            })
            .collect()
    }
}

pub struct SelectorBar<'a> {
    pub title: &'a str,
    pub options: &'a [SelectorOption],
    pub active_style: Style,
    pub inactive_style: Style,
    pub separator: &'a str,
}

impl<'a> SelectorBar<'a> {
    pub fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.options.len() * 2);
        for (index, option) in self.options.iter().enumerate() {
            if index > 0 && !self.separator.is_empty() {
                spans.push(Span::styled(self.separator.to_string(), self.inactive_style));
            }
            let style = if option.active {
                self.active_style
            } else {
                self.inactive_style
            };
            spans.push(Span::styled(format!(" {} ", option.label), style));
        }
        Line::from(spans)
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let paragraph = Paragraph::new(self.line())
            .block(Block::default().title(self.title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
