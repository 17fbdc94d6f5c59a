//! A shelter's daily operating window.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::Serialize;

use crate::error::{Result, ScheduleError};

/// Daily `[opening, closing)` window, interpreted in UTC.
///
/// Construction enforces `opening < closing`, so every window derived from it
/// has positive length and never crosses midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OperatingHours {
    opening: NaiveTime,
    closing: NaiveTime,
}

impl OperatingHours {
    /// # Errors
    /// Returns `ScheduleError::InvalidOperatingHours` when `opening >= closing`.
    pub fn new(shelter_id: &str, opening: NaiveTime, closing: NaiveTime) -> Result<Self> {
        if opening >= closing {
            return Err(ScheduleError::InvalidOperatingHours {
                shelter_id: shelter_id.to_string(),
                opening,
                closing,
            });
        }
        Ok(OperatingHours { opening, closing })
    }

    pub fn opening(&self) -> NaiveTime {
        self.opening
    }

    pub fn closing(&self) -> NaiveTime {
        self.closing
    }

    /// The UTC instants bounding the window on `date`.
    pub fn window_on(&self, date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            date.and_time(self.opening).and_utc(),
            date.and_time(self.closing).and_utc(),
        )
    }

    pub fn daily_minutes(&self) -> i64 {
        (self.closing - self.opening).num_minutes()
    }
}
