//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextTab,
    PrevTab,
    SwitchTab(usize),
    /// Previous day, sol or mission depending on the active tab.
    MoveLeft,
    /// Next day, sol or mission depending on the active tab.
    MoveRight,
    Today,
    EditDate,
    EditSol,
    JumpToMission(usize),
    OpenHelp,
    Cancel,
}

/// Keys accepted while a date or sol prompt is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    Insert(char),
    Backspace,
    Submit,
    Cancel,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    if modifiers.contains(KeyModifiers::ALT) {
        return match code {
            KeyCode::Char(c @ '1'..='9') => Some(Action::JumpToMission(digit_index(c))),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('t') => Some(Action::Today),
        KeyCode::Char('d') => Some(Action::EditDate),
        KeyCode::Char('s') => Some(Action::EditSol),
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::NextTab),
        KeyCode::BackTab => Some(Action::PrevTab),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveRight),
        KeyCode::Char(c @ '1'..='9') => Some(Action::SwitchTab(digit_index(c))),
        _ => None,
    }
}

pub fn map_prompt_key(event: KeyEvent) -> Option<PromptAction> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(PromptAction::Cancel),
            _ => None,
        };
    }

    match code {
        KeyCode::Enter => Some(PromptAction::Submit),
        KeyCode::Esc => Some(PromptAction::Cancel),
        KeyCode::Backspace => Some(PromptAction::Backspace),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => Some(PromptAction::Insert(c)),
        _ => None,
    }
}

fn digit_index(c: char) -> usize {
    c.to_digit(10).map(|d| d as usize).unwrap_or(1).saturating_sub(1)
}
