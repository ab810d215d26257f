//! Mars rover photo list.

use crate::state::App;
use crate::views::split_body;
use astroview_core::{RoverPhoto, Tab};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub const NO_PHOTOS: &str = "No photos available for this Sol. Try a different day.";

pub fn render(f: &mut Frame<'_>, app: &App, sol: u32, photos: &[RoverPhoto], area: Rect) {
    let content = split_body(f, app, Tab::Mars, area);

    if photos.is_empty() {
        let empty = Paragraph::new(NO_PHOTOS)
            .style(Style::default().fg(app.theme.text_dim))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, content);
        return;
    }

    let items: Vec<ListItem> = photos
        .iter()
        .map(|photo| {
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        photo.camera.full_name.clone(),
                        Style::default().fg(app.theme.primary),
                    ),
                    Span::raw(format!(
                        " | {} | Sol {} | {}",
                        photo.rover.name,
                        photo.sol,
                        photo.earth_date.format("%Y-%m-%d")
                    )),
                ]),
                Line::from(Span::styled(
                    format!("  {}", photo.img_src),
                    Style::default().fg(app.theme.text_dim),
                )),
            ])
        })
        .collect();

    let title = format!("Sol {} \u{00b7} {} photos", sol, photos.len());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, content);
}
