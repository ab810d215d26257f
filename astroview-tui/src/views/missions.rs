//! Historic mission carousel.

use crate::state::App;
use crate::views::split_body;
use crate::widgets::{DetailPanel, SelectorBar, SelectorOption};
use astroview_core::{Mission, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    Frame,
};

pub fn render(
    f: &mut Frame<'_>,
    app: &App,
    mission: &Mission,
    index: usize,
    count: usize,
    area: Rect,
) {
    let content = split_body(f, app, Tab::Missions, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(content);

    let mut panel = DetailPanel::new(mission.name, Style::default().fg(app.theme.secondary))
        .field("Date", mission.date)
        .field("About", mission.description)
        .field("Image", mission.image)
        .line(Line::styled(
            "Achievements",
            Style::default()
                .fg(app.theme.tertiary)
                .add_modifier(Modifier::BOLD),
        ));
    for achievement in mission.achievements {
        panel = panel.line(Line::from(format!("\u{2022} {}", achievement)));
    }
    panel.render(f, chunks[0]);

    let options = SelectorOption::from_labels((1..=count).map(|n| n.to_string()), index);
    let title = format!("Mission {}/{}", index + 1, count);
    let indicator = SelectorBar {
        title: &title,
        options: &options,
        active_style: Style::default()
            .fg(app.theme.bg)
            .bg(app.theme.secondary)
            .add_modifier(Modifier::BOLD),
        inactive_style: Style::default().fg(app.theme.text_dim),
        separator: "",
    };
    indicator.render(f, chunks[1]);
}
