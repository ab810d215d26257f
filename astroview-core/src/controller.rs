//! View-state machine.
//!
//! [`ViewState`] owns everything the UI shows. User actions mutate it and
//! return the fetches the runtime must start; completions come back through
//! [`ViewState::complete`]. Each issued fetch carries a [`RequestToken`], and a
//! completion is applied only if its token is the latest one issued for its
//! [`Slot`]. Anything older is dropped.

use crate::error::InputError;
use crate::missions::{Mission, HISTORICAL_MISSIONS};
use crate::model::{PictureOfDay, RoverPhoto, MAX_ROVER_PHOTOS};
use crate::tab::Tab;
use chrono::{NaiveDate, TimeDelta};
use std::ops::RangeInclusive;

pub const SOL_MIN: u32 = 1;
pub const SOL_MAX: u32 = 3000;
pub const DEFAULT_SOL: u32 = 1000;

/// Date of the first Astronomy Picture of the Day.
pub fn apod_first_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1995, 6, 16).unwrap_or(NaiveDate::MIN)
}

// ============================================================================
// REQUESTS AND OUTCOMES
// ============================================================================

/// Independently fetched dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    PictureOfDay,
    RoverPhotos,
}

impl Slot {
    /// The slot backing a tab. Missions are static and have none.
    pub fn for_tab(tab: Tab) -> Option<Slot> {
        match tab {
            Tab::Apod => Some(Slot::PictureOfDay),
            Tab::Mars => Some(Slot::RoverPhotos),
            Tab::Missions => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::PictureOfDay => "picture_of_day",
            Slot::RoverPhotos => "rover_photos",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monotonically increasing identifier of an issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A fetch the runtime must perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchRequest {
    PictureOfDay { token: RequestToken, date: NaiveDate },
    RoverPhotos { token: RequestToken, sol: u32 },
}

impl FetchRequest {
    pub fn token(&self) -> RequestToken {
        match self {
            FetchRequest::PictureOfDay { token, .. } | FetchRequest::RoverPhotos { token, .. } => {
                *token
            }
        }
    }

    pub fn slot(&self) -> Slot {
        match self {
            FetchRequest::PictureOfDay { .. } => Slot::PictureOfDay,
            FetchRequest::RoverPhotos { .. } => Slot::RoverPhotos,
        }
    }
}

/// Result of a fetch, failures already reduced to a display message.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    PictureOfDay {
        token: RequestToken,
        result: Result<PictureOfDay, String>,
    },
    RoverPhotos {
        token: RequestToken,
        result: Result<Vec<RoverPhoto>, String>,
    },
}

impl FetchOutcome {
    pub fn token(&self) -> RequestToken {
        match self {
            FetchOutcome::PictureOfDay { token, .. } | FetchOutcome::RoverPhotos { token, .. } => {
                *token
            }
        }
    }

    pub fn slot(&self) -> Slot {
        match self {
            FetchOutcome::PictureOfDay { .. } => Slot::PictureOfDay,
            FetchOutcome::RoverPhotos { .. } => Slot::RoverPhotos,
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            FetchOutcome::PictureOfDay { result, .. } => result.is_ok(),
            FetchOutcome::RoverPhotos { result, .. } => result.is_ok(),
        }
    }
}

// ============================================================================
// RENDER PLAN
// ============================================================================

/// What the active tab should display, derived from state without side effects.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<'a> {
    Loading {
        tab: Tab,
    },
    Error {
        tab: Tab,
        message: &'a str,
    },
    PictureOfDay {
        date: NaiveDate,
        picture: Option<&'a PictureOfDay>,
    },
    RoverPhotos {
        sol: u32,
        photos: &'a [RoverPhoto],
    },
    Missions {
        mission: &'a Mission,
        index: usize,
        count: usize,
    },
}

// ============================================================================
// SLOT STATE
// ============================================================================

/// Data, error and in-flight request of one slot. `K` is the request key
/// (date or sol) the in-flight fetch was issued for.
#[derive(Debug, Clone)]
struct SlotState<T, K> {
    data: Option<T>,
    error: Option<String>,
    in_flight: Option<(RequestToken, K)>,
}

impl<T, K: Copy + PartialEq> SlotState<T, K> {
    fn new() -> Self {
        Self {
            data: None,
            error: None,
            in_flight: None,
        }
    }

    fn begin(&mut self, token: RequestToken, key: K) {
        self.in_flight = Some((token, key));
        self.error = None;
    }

    fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    fn in_flight_for(&self, key: K) -> bool {
        matches!(self.in_flight, Some((_, current)) if current == key)
    }

    /// Apply a result if `token` is the current one. Failures clear the
    /// payload so stale data is never shown next to an error.
    fn finish(&mut self, token: RequestToken, result: Result<T, String>) -> bool {
        match self.in_flight {
            Some((current, _)) if current == token => {
                self.in_flight = None;
                match result {
                    Ok(data) => {
                        self.data = Some(data);
                        self.error = None;
                    }
                    Err(message) => {
                        self.data = None;
                        self.error = Some(message);
                    }
                }
                true
            }
            _ => false,
        }
    }
}

// ============================================================================
// VIEW STATE
// ============================================================================

#[derive(Debug, Clone)]
pub struct ViewState {
    active_tab: Tab,
    selected_date: NaiveDate,
    selected_sol: u32,
    mission_index: usize,
    missions: &'static [Mission],
    picture: SlotState<PictureOfDay, NaiveDate>,
    photos: SlotState<Vec<RoverPhoto>, u32>,
    last_token: u64,
}

impl ViewState {
    /// Fresh state: APOD tab, `today` selected, default sol, first mission.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            active_tab: Tab::Apod,
            selected_date: today,
            selected_sol: DEFAULT_SOL,
            mission_index: 0,
            missions: &HISTORICAL_MISSIONS,
            picture: SlotState::new(),
            photos: SlotState::new(),
            last_token: 0,
        }
    }

    /// Selectable date range for a given "today".
    pub fn date_bounds(today: NaiveDate) -> RangeInclusive<NaiveDate> {
        apod_first_date()..=today
    }

    pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
        NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate {
            input: input.to_string(),
        })
    }

    pub fn parse_sol(input: &str) -> Result<i64, InputError> {
        input.trim().parse::<i64>().map_err(|_| InputError::InvalidSol {
            input: input.to_string(),
        })
    }

    /// Fetches issued when the app starts: the picture for the selected date,
    /// plus rover photos if the mars tab is already active.
    pub fn initial_load(&mut self) -> Vec<FetchRequest> {
        let mut requests = vec![self.issue_picture_of_day()];
        if self.active_tab == Tab::Mars {
            requests.extend(self.rover_photos_if_idle());
        }
        requests
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    /// Activate `tab`. Entering mars fetches the selected sol unless that
    /// exact fetch is already in flight. Re-selecting the active tab is a no-op.
    pub fn switch_tab(&mut self, tab: Tab) -> Option<FetchRequest> {
        if tab == self.active_tab {
            return None;
        }
        self.active_tab = tab;
        if tab == Tab::Mars {
            self.rover_photos_if_idle()
        } else {
            None
        }
    }

    pub fn next_tab(&mut self) -> Option<FetchRequest> {
        self.switch_tab(self.active_tab.next())
    }

    pub fn previous_tab(&mut self) -> Option<FetchRequest> {
        self.switch_tab(self.active_tab.previous())
    }

    /// Select a date and fetch its picture, whatever tab is active.
    pub fn set_date(
        &mut self,
        date: NaiveDate,
        today: NaiveDate,
    ) -> Result<FetchRequest, InputError> {
        let bounds = Self::date_bounds(today);
        if !bounds.contains(&date) {
            return Err(if date > *bounds.end() {
                InputError::DateInFuture { date, today }
            } else {
                InputError::DateBeforeArchive {
                    date,
                    first: *bounds.start(),
                }
            });
        }
        self.selected_date = date;
        Ok(self.issue_picture_of_day())
    }

    pub fn step_date(&mut self, days: i64, today: NaiveDate) -> Result<FetchRequest, InputError> {
        let target = TimeDelta::try_days(days)
            .and_then(|delta| self.selected_date.checked_add_signed(delta))
            .ok_or_else(|| InputError::InvalidDate {
                input: format!("{} {:+} days", self.selected_date, days),
            })?;
        self.set_date(target, today)
    }

    pub fn set_date_input(
        &mut self,
        input: &str,
        today: NaiveDate,
    ) -> Result<FetchRequest, InputError> {
        let date = Self::parse_date(input)?;
        self.set_date(date, today)
    }

    /// Select a sol. Fetches only while the mars tab is active.
    pub fn set_sol(&mut self, sol: i64) -> Result<Option<FetchRequest>, InputError> {
        let sol = u32::try_from(sol)
            .ok()
            .filter(|s| (SOL_MIN..=SOL_MAX).contains(s))
            .ok_or(InputError::SolOutOfRange {
                sol,
                min: SOL_MIN,
                max: SOL_MAX,
            })?;
        self.selected_sol = sol;
        if self.active_tab == Tab::Mars {
            Ok(self.rover_photos_if_idle())
        } else {
            Ok(None)
        }
    }

    pub fn step_sol(&mut self, delta: i64) -> Result<Option<FetchRequest>, InputError> {
        self.set_sol(i64::from(self.selected_sol).saturating_add(delta))
    }

    pub fn set_sol_input(&mut self, input: &str) -> Result<Option<FetchRequest>, InputError> {
        let sol = Self::parse_sol(input)?;
        self.set_sol(sol)
    }

    pub fn next_mission(&mut self) {
        let count = self.missions.len();
        self.mission_index = (self.mission_index + 1) % count;
    }

    pub fn previous_mission(&mut self) {
        let count = self.missions.len();
        self.mission_index = (self.mission_index + count - 1) % count;
    }

    pub fn jump_to_mission(&mut self, index: usize) -> Result<(), InputError> {
        if index >= self.missions.len() {
            return Err(InputError::MissionOutOfRange {
                index,
                count: self.missions.len(),
            });
        }
        self.mission_index = index;
        Ok(())
    }

    /// Apply a fetch result. Returns `false` when the outcome was superseded
    /// by a newer request for the same slot and has been dropped.
    pub fn complete(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::PictureOfDay { token, result } => self.picture.finish(token, result),
            FetchOutcome::RoverPhotos { token, result } => {
                let result = result.map(|mut photos| {
                    photos.truncate(MAX_ROVER_PHOTOS);
                    photos
                });
                self.photos.finish(token, result)
            }
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn selected_sol(&self) -> u32 {
        self.selected_sol
    }

    pub fn mission_index(&self) -> usize {
        self.mission_index
    }

    pub fn missions(&self) -> &'static [Mission] {
        self.missions
    }

    pub fn current_mission(&self) -> &'static Mission {
        &self.missions[self.mission_index]
    }

    pub fn picture(&self) -> Option<&PictureOfDay> {
        self.picture.data.as_ref()
    }

    pub fn rover_photos(&self) -> &[RoverPhoto] {
        self.photos.data.as_deref().unwrap_or(&[])
    }

    pub fn is_loading(&self, slot: Slot) -> bool {
        match slot {
            Slot::PictureOfDay => self.picture.is_loading(),
            Slot::RoverPhotos => self.photos.is_loading(),
        }
    }

    pub fn slot_error(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::PictureOfDay => self.picture.error.as_deref(),
            Slot::RoverPhotos => self.photos.error.as_deref(),
        }
    }

    /// True while the fetch backing the active tab is outstanding.
    pub fn loading(&self) -> bool {
        Slot::for_tab(self.active_tab)
            .map(|slot| self.is_loading(slot))
            .unwrap_or(false)
    }

    /// Error of the slot backing the active tab.
    pub fn error(&self) -> Option<&str> {
        Slot::for_tab(self.active_tab).and_then(|slot| self.slot_error(slot))
    }

    pub fn screen(&self) -> Screen<'_> {
        if self.loading() {
            return Screen::Loading {
                tab: self.active_tab,
            };
        }
        if let Some(message) = self.error() {
            return Screen::Error {
                tab: self.active_tab,
                message,
            };
        }
        match self.active_tab {
            Tab::Apod => Screen::PictureOfDay {
                date: self.selected_date,
                picture: self.picture(),
            },
            Tab::Mars => Screen::RoverPhotos {
                sol: self.selected_sol,
                photos: self.rover_photos(),
            },
            Tab::Missions => Screen::Missions {
                mission: self.current_mission(),
                index: self.mission_index,
                count: self.missions.len(),
            },
        }
    }

    // ------------------------------------------------------------------------
    // Request issuing
    // ------------------------------------------------------------------------

    fn next_token(&mut self) -> RequestToken {
        self.last_token += 1;
        RequestToken(self.last_token)
    }

    fn issue_picture_of_day(&mut self) -> FetchRequest {
        let token = self.next_token();
        let date = self.selected_date;
        self.picture.begin(token, date);
        FetchRequest::PictureOfDay { token, date }
    }

    fn rover_photos_if_idle(&mut self) -> Option<FetchRequest> {
        let sol = self.selected_sol;
        if self.photos.in_flight_for(sol) {
            return None;
        }
        let token = self.next_token();
        self.photos.begin(token, sol);
        Some(FetchRequest::RoverPhotos { token, sol })
    }
}


// ============================================================================
// PROPERTY-BASED TESTS
// ============================================================================
