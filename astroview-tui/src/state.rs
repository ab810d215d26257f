//! Application state for the TUI.
//!
//! [`App`] wraps the core [`ViewState`] with the purely interactive pieces:
//! the open prompt, the help modal and footer notifications. Key handling
//! returns the fetches to start; it never performs I/O itself.

use crate::config::TuiConfig;
use crate::keys::{map_key, map_prompt_key, Action, PromptAction};
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::SynthBruteTheme;
use astroview_core::{FetchOutcome, FetchRequest, InputError, Slot, Tab, ViewState};
use chrono::{DateTime, NaiveDate, Utc};
use crossterm::event::KeyEvent;

/// Longest accepted prompt input. Fits `YYYY-MM-DD`.
pub const PROMPT_MAX_LEN: usize = 10;

pub const HELP_TEXT: &str = "Tab/Shift-Tab or 1-3: switch panel | \u{2190}/\u{2192}: previous/next \
day, sol or mission | t: today | d: enter date | s: enter sol | Alt+1-4: jump to mission | \
q: quit";

/// Today as the upstream archive counts it: the UTC calendar date.
pub fn current_date() -> NaiveDate {
    Utc::now().date_naive()
}

pub struct App {
    pub theme: SynthBruteTheme,
    pub view: ViewState,
    pub prompt: Option<Prompt>,
    pub notifications: Vec<Notification>,
    pub modal: Option<Modal>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Date,
    Sol,
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Date => "Date (YYYY-MM-DD)",
            PromptKind::Sol => "Sol (1-3000)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub kind: PromptKind,
    pub input: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

impl App {
    pub fn new(config: &TuiConfig, today: NaiveDate) -> Self {
        Self {
            theme: SynthBruteTheme::by_name(&config.theme.name).unwrap_or_default(),
            view: ViewState::new(today),
            prompt: None,
            notifications: Vec::new(),
            modal: None,
            should_quit: false,
        }
    }

    /// Fetches to issue once the event loop is running.
    pub fn start(&mut self) -> Vec<FetchRequest> {
        self.view.initial_load()
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn prune_notifications(&mut self, now: DateTime<Utc>) {
        self.notifications.retain(|n| !n.is_expired(now));
    }

    pub fn handle_key(&mut self, key: KeyEvent, today: NaiveDate) -> Vec<FetchRequest> {
        if self.modal.is_some() {
            self.modal = None;
            return Vec::new();
        }
        if self.prompt.is_some() {
            return match map_prompt_key(key) {
                Some(action) => self.handle_prompt(action, today),
                None => Vec::new(),
            };
        }
        match map_key(key) {
            Some(action) => self.handle_action(action, today),
            None => Vec::new(),
        }
    }

    pub fn handle_action(&mut self, action: Action, today: NaiveDate) -> Vec<FetchRequest> {
        let tab = self.view.active_tab();
        let result: Result<Option<FetchRequest>, InputError> = match action {
            Action::Quit => {
                self.should_quit = true;
                Ok(None)
            }
            Action::NextTab => Ok(self.view.next_tab()),
            Action::PrevTab => Ok(self.view.previous_tab()),
            Action::SwitchTab(index) => Ok(Tab::from_index(index)
                .and_then(|tab| self.view.switch_tab(tab))),
            Action::MoveLeft => self.step(tab, -1, today),
            Action::MoveRight => self.step(tab, 1, today),
            Action::Today if tab == Tab::Apod => self.view.set_date(today, today).map(Some),
            Action::EditDate if tab == Tab::Apod => {
                self.open_prompt(PromptKind::Date);
                Ok(None)
            }
            Action::EditSol if tab == Tab::Mars => {
                self.open_prompt(PromptKind::Sol);
                Ok(None)
            }
            Action::JumpToMission(index) if tab == Tab::Missions => {
                self.view.jump_to_mission(index).map(|()| None)
            }
            Action::OpenHelp => {
                self.modal = Some(Modal {
                    title: "Keybindings".to_string(),
                    message: HELP_TEXT.to_string(),
                });
                Ok(None)
            }
            Action::Today
            | Action::EditDate
            | Action::EditSol
            | Action::JumpToMission(_)
            | Action::Cancel => Ok(None),
        };
        self.collect(result)
    }

    /// Apply a finished fetch. Returns `false` if it was stale and dropped.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        let slot = outcome.slot();
        let token = outcome.token();
        let success = outcome.is_success();
        let applied = self.view.complete(outcome);
        if !applied {
            tracing::debug!(%slot, %token, "discarding superseded fetch result");
            return false;
        }
        tracing::info!(%slot, %token, success, "fetch completed");
        if success {
            let message = match slot {
                Slot::PictureOfDay => format!(
                    "Loaded picture of the day for {}",
                    self.view.selected_date().format("%Y-%m-%d")
                ),
                Slot::RoverPhotos => {
                    format!("Loaded {} rover photos", self.view.rover_photos().len())
                }
            };
            self.notify(NotificationLevel::Info, message);
        } else {
            let what = match slot {
                Slot::PictureOfDay => "Picture of the day",
                Slot::RoverPhotos => "Rover photo",
            };
            self.notify(NotificationLevel::Error, format!("{} request failed", what));
        }
        true
    }

    fn step(
        &mut self,
        tab: Tab,
        delta: i64,
        today: NaiveDate,
    ) -> Result<Option<FetchRequest>, InputError> {
        match tab {
            Tab::Apod => self.view.step_date(delta, today).map(Some),
            Tab::Mars => self.view.step_sol(delta),
            Tab::Missions => {
                if delta < 0 {
                    self.view.previous_mission();
                } else {
                    self.view.next_mission();
                }
                Ok(None)
            }
        }
    }

    fn open_prompt(&mut self, kind: PromptKind) {
        let input = match kind {
            PromptKind::Date => self.view.selected_date().format("%Y-%m-%d").to_string(),
            PromptKind::Sol => self.view.selected_sol().to_string(),
        };
        self.prompt = Some(Prompt { kind, input });
    }

    fn handle_prompt(&mut self, action: PromptAction, today: NaiveDate) -> Vec<FetchRequest> {
        let Some(prompt) = self.prompt.as_mut() else {
            return Vec::new();
        };
        match action {
            PromptAction::Insert(c) => {
                if prompt.input.len() < PROMPT_MAX_LEN {
                    prompt.input.push(c);
                }
                Vec::new()
            }
            PromptAction::Backspace => {
                prompt.input.pop();
                Vec::new()
            }
            PromptAction::Cancel => {
                self.prompt = None;
                Vec::new()
            }
            PromptAction::Submit => {
                let Some(Prompt { kind, input }) = self.prompt.take() else {
                    return Vec::new();
                };
                let result = match kind {
                    PromptKind::Date => self.view.set_date_input(&input, today).map(Some),
                    PromptKind::Sol => self.view.set_sol_input(&input),
                };
                self.collect(result)
            }
        }
    }

    fn collect(&mut self, result: Result<Option<FetchRequest>, InputError>) -> Vec<FetchRequest> {
        match result {
            Ok(request) => request.into_iter().collect(),
            Err(err) => {
                tracing::debug!(error = %err, "input rejected");
                self.notify(NotificationLevel::Warning, err.to_string());
                Vec::new()
            }
        }
    }
}
