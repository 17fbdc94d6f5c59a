//! Error types for scheduling operations.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

/// Broad failure category, used by outer layers to pick a status signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced animal does not exist.
    NotFound,
    /// The caller has no active fostering relationship with the animal.
    Conflict,
    /// The request itself is malformed (e.g. week start out of range).
    BadRequest,
    /// Upstream data broke a precondition the core relies on.
    InvariantViolation,
    /// A slot with `start >= end` reached normalization.
    MalformedSlot,
    /// A collaborator failed to answer.
    Store,
    /// Configuration could not be loaded or is out of range.
    Config,
}

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("Animal not found: {0}")]
    AnimalNotFound(String),

    #[error("User {user_id} has no active fostering of animal {animal_id}")]
    NoActiveFostering { animal_id: String, user_id: String },

    #[error("Invalid operating hours for shelter {shelter_id}: opening {opening} is not before closing {closing}")]
    InvalidOperatingHours {
        shelter_id: String,
        opening: NaiveTime,
        closing: NaiveTime,
    },

    #[error("Malformed slot {slot_id}: start {start} is not before end {end}")]
    MalformedSlot {
        slot_id: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid week start {week_start}: {reason}")]
    InvalidWeekStart { week_start: NaiveDate, reason: String },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScheduleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScheduleError::AnimalNotFound(_) => ErrorKind::NotFound,
            ScheduleError::NoActiveFostering { .. } => ErrorKind::Conflict,
            ScheduleError::InvalidOperatingHours { .. } => ErrorKind::InvariantViolation,
            ScheduleError::MalformedSlot { .. } => ErrorKind::MalformedSlot,
            ScheduleError::InvalidWeekStart { .. } => ErrorKind::BadRequest,
            ScheduleError::Store(_) => ErrorKind::Store,
            ScheduleError::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP-style status code for this failure.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::BadRequest => 400,
            ErrorKind::InvariantViolation
            | ErrorKind::MalformedSlot
            | ErrorKind::Store
            | ErrorKind::Config => 500,
        }
    }
}

/// Convenience alias used throughout shelter-schedule.
pub type Result<T> = std::result::Result<T, ScheduleError>;
