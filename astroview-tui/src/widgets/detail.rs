//! Detail panel: labelled fields followed by free-form body lines.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct DetailPanel<'a> {
    pub title: &'a str,
    pub fields: Vec<(&'a str, String)>,
    /// Rendered under the fields, separated by a blank line.
    pub body: Vec<Line<'a>>,
    pub style: Style,
}

impl<'a> DetailPanel<'a> {
    pub fn new(title: &'a str, style: Style) -> Self {
        Self {
            title,
            fields: Vec::new(),
            body: Vec::new(),
            style,
        }
    }

    pub fn field(mut self, label: &'a str, value: impl Into<String>) -> Self {
        self.fields.push((label, value.into()));
        self
    }

    pub fn line(mut self, line: impl Into<Line<'a>>) -> Self {
        self.body.push(line.into());
        self
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut lines: Vec<Line> = self
            .fields
            .iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{}: ", label), self.style),
                    Span::raw(value.clone()),
                ])
            })
            .collect();
        if !self.fields.is_empty() && !self.body.is_empty() {
            lines.push(Line::default());
        }
        lines.extend(self.body.iter().cloned());

        let widget = Paragraph::new(Text::from(lines))
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .wrap(Wrap { trim: true });

        f.render_widget(widget, area);
    }
}
