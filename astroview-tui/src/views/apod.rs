//! Astronomy picture of the day panel.

use crate::state::App;
use crate::theme::media_type_color;
use crate::views::split_body;
use crate::widgets::DetailPanel;
use astroview_core::{PictureOfDay, Tab};
use chrono::NaiveDate;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const VIDEO_NOTICE: &str = "This entry is a video. Open the URL to watch it.";

pub fn render(
    f: &mut Frame<'_>,
    app: &App,
    date: NaiveDate,
    picture: Option<&PictureOfDay>,
    area: Rect,
) {
    let content = split_body(f, app, Tab::Apod, area);

    let Some(picture) = picture else {
        let empty = Paragraph::new(format!("No picture loaded for {}.", date))
            .style(Style::default().fg(app.theme.text_dim))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, content);
        return;
    };

    let mut panel = DetailPanel::new(
        picture.title.as_str(),
        Style::default().fg(app.theme.secondary),
    )
    .field("Date", picture.date.format("%Y-%m-%d").to_string())
    .field("Media", picture.media_type.to_string())
    .field("URL", picture.url.clone());
    if let Some(hdurl) = &picture.hdurl {
        panel = panel.field("HD URL", hdurl.clone());
    }
    if let Some(credit) = picture.credit() {
        panel = panel.field("Copyright", format!("\u{00a9} {}", credit));
    }

    if picture.is_video() {
        panel = panel.line(Span::styled(
            VIDEO_NOTICE,
            Style::default()
                .fg(media_type_color(picture.media_type, &app.theme))
                .add_modifier(Modifier::BOLD),
        ));
        panel = panel.line(Line::default());
    }
    panel = panel.line(Line::from(picture.explanation.as_str()));

    panel.render(f, content);
}
