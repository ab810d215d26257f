//! AstroView Core
//!
//! Payload schemas for the upstream astronomy endpoints, the static mission
//! catalog, and the view-state machine that decides when data must be fetched.
//! This crate performs no I/O: fetches are described as [`FetchRequest`]
//! values and their results are fed back as [`FetchOutcome`] values.

pub mod controller;
pub mod error;
pub mod missions;
pub mod model;
pub mod tab;

pub use controller::{
    apod_first_date, FetchOutcome, FetchRequest, RequestToken, Screen, Slot, ViewState,
    DEFAULT_SOL, SOL_MAX, SOL_MIN,
};
pub use error::InputError;
pub use missions::{Mission, HISTORICAL_MISSIONS};
pub use model::{
    MediaType, PictureOfDay, RoverCamera, RoverInfo, RoverPhoto, RoverPhotoPage,
    MAX_ROVER_PHOTOS,
};
pub use tab::Tab;
