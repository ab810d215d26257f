//! View rendering dispatch.

pub mod apod;
pub mod mars;
pub mod missions;

use crate::state::App;
use crate::theme::notification_color;
use crate::widgets::{SelectorBar, SelectorOption, StatusIndicator};
use astroview_core::{Screen, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const ATTRIBUTION: &str = "Data courtesy of NASA";

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.view.screen() {
        Screen::Loading { tab } => {
            let what = match tab {
                Tab::Apod => "picture of the day",
                Tab::Mars => "rover photos",
                Tab::Missions => "missions",
            };
            render_status(f, app, tab, StatusIndicator::loading(what, &app.theme), layout[1]);
        }
        Screen::Error { tab, message } => {
            render_status(f, app, tab, StatusIndicator::error(message, &app.theme), layout[1]);
        }
        Screen::PictureOfDay { date, picture } => apod::render(f, app, date, picture, layout[1]),
        Screen::RoverPhotos { sol, photos } => mars::render(f, app, sol, photos, layout[1]),
        Screen::Missions {
            mission,
            index,
            count,
        } => missions::render(f, app, mission, index, count, layout[1]),
    }

    render_footer(f, app, layout[2]);

    if app.modal.is_some() {
        render_modal(f, app);
    }
}

/// Controls line shown at the top of a tab body, including while loading
/// or failed.
pub fn controls_line(app: &App, tab: Tab) -> Line<'static> {
    let value_style = Style::default()
        .fg(app.theme.tertiary)
        .add_modifier(Modifier::BOLD);
    let hint_style = Style::default().fg(app.theme.text_dim);
    match tab {
        Tab::Apod => Line::from(vec![
            Span::raw("Date: "),
            Span::styled(app.view.selected_date().format("%Y-%m-%d").to_string(), value_style),
            Span::styled("   \u{2190}/\u{2192} day \u{00b7} t today \u{00b7} d enter date", hint_style),
        ]),
        Tab::Mars => Line::from(vec![
            Span::raw("Sol: "),
            Span::styled(app.view.selected_sol().to_string(), value_style),
            Span::styled("   \u{2190}/\u{2192} sol \u{00b7} s enter sol", hint_style),
        ]),
        Tab::Missions => Line::from(vec![Span::styled(
            "\u{2190}/\u{2192} previous/next \u{00b7} Alt+1-4 jump",
            hint_style,
        )]),
    }
}

/// Split a tab body into the controls strip and the content area.
pub fn split_body(f: &mut Frame<'_>, app: &App, tab: Tab, area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);
    let controls = Paragraph::new(controls_line(app, tab)).block(
        Block::default()
            .title(tab.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_focus)),
    );
    f.render_widget(controls, chunks[0]);
    chunks[1]
}

fn render_status(f: &mut Frame<'_>, app: &App, tab: Tab, status: StatusIndicator, area: Rect) {
    let content = split_body(f, app, tab, area);
    status.render(f, content);
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let active = app.view.active_tab().index();
    let options = SelectorOption::from_labels(
        Tab::all()
            .iter()
            .enumerate()
            .map(|(i, tab)| format!("{} {}", i + 1, tab.title())),
        active,
    );
    let bar = SelectorBar {
        title: "AstroView",
        options: &options,
        active_style: Style::default()
            .fg(app.theme.bg)
            .bg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
        inactive_style: Style::default().fg(app.theme.text_dim),
        separator: "|",
    };
    bar.render(f, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let status = if let Some(prompt) = &app.prompt {
        Line::from(vec![
            Span::styled(
                format!("{}: ", prompt.kind.label()),
                Style::default().fg(app.theme.secondary),
            ),
            Span::styled(format!("{}_", prompt.input), Style::default().fg(app.theme.text)),
            Span::styled(
                "  Enter apply \u{00b7} Esc cancel",
                Style::default().fg(app.theme.text_dim),
            ),
        ])
    } else if let Some(note) = app.latest_notification() {
        Line::from(Span::styled(
            note.message.clone(),
            Style::default().fg(notification_color(note.level, &app.theme)),
        ))
    } else {
        Line::from(Span::styled(
            "Tab switch panel \u{00b7} ? help \u{00b7} q quit",
            Style::default().fg(app.theme.text_dim),
        ))
    };
    let attribution = Line::from(Span::styled(
        ATTRIBUTION,
        Style::default().fg(app.theme.text_muted),
    ));
    let footer = Paragraph::new(vec![status, attribution])
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, app: &App) {
    let Some(modal) = &app.modal else {
        return;
    };
    let area = centered_rect(60, 40, f.size());
    let popup = Paragraph::new(modal.message.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(app.theme.text).bg(app.theme.bg_secondary))
        .block(
            Block::default()
                .title(modal.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.secondary)),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
