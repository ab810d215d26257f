//! Event types for the TUI event loop.

use astroview_core::FetchOutcome;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum TuiEvent {
    Input(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
    Fetched(Box<FetchOutcome>),
}
