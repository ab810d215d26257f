//! AstroView TUI entry point.

use astroview_tui::api_client::ApiClient;
use astroview_tui::config::TuiConfig;
use astroview_tui::error::TuiError;
use astroview_tui::events::TuiEvent;
use astroview_tui::logging::init_logging;
use astroview_tui::runtime::FetchRuntime;
use astroview_tui::state::{current_date, App};
use astroview_tui::views::render_view;
use chrono::Utc;
use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    init_logging(&config.log_path)?;
    let api = ApiClient::new(&config)?;
    tracing::info!(
        base_url = %config.api_base_url,
        rover = %config.rover,
        timeout_ms = ?config.request_timeout_ms,
        "Starting AstroView"
    );

    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(&config, current_date());

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    let mut runtime = FetchRuntime::new(Arc::new(api), event_tx.clone());

    spawn_input_reader(event_tx.clone());
    runtime.dispatch_all(app.start());

    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                handle_event(&mut app, &mut runtime, event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    runtime.cancel_all();
    tracing::info!("Shutting down");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let sent = match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        sender.blocking_send(TuiEvent::Input(key))
                    }
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}

fn handle_event(app: &mut App, runtime: &mut FetchRuntime, event: TuiEvent) {
    match event {
        TuiEvent::Input(key) => {
            let requests = app.handle_key(key, current_date());
            runtime.dispatch_all(requests);
        }
        TuiEvent::Fetched(outcome) => {
            app.apply_outcome(*outcome);
        }
        TuiEvent::Tick => app.prune_notifications(Utc::now()),
        TuiEvent::Resize { .. } => {}
    }
}
