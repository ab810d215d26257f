//! Input validation errors for user-driven state changes.

use chrono::NaiveDate;
use thiserror::Error;

/// A rejected input. State is left untouched when one of these is returned.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Date {date} is after today ({today})")]
    DateInFuture { date: NaiveDate, today: NaiveDate },

    #[error("Date {date} is before the first picture of the day ({first})")]
    DateBeforeArchive { date: NaiveDate, first: NaiveDate },

    #[error("Invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate { input: String },

    #[error("Sol {sol} is outside {min}..={max}")]
    SolOutOfRange { sol: i64, min: u32, max: u32 },

    #[error("Invalid sol '{input}', expected a whole number")]
    InvalidSol { input: String },

    #[error("Mission {index} does not exist (have {count})")]
    MissionOutOfRange { index: usize, count: usize },
}
