//! Weekly schedule requests and week-start validation.

use chrono::{Datelike, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Identity of the user asking for a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user_id: String,
}

impl Caller {
    pub fn new(user_id: impl Into<String>) -> Self {
        Caller {
            user_id: user_id.into(),
        }
    }
}

/// How far from today a requested week may start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekStartPolicy {
    pub lookback_months: u32,
    pub lookahead_years: u32,
}

impl Default for WeekStartPolicy {
    fn default() -> Self {
        WeekStartPolicy {
            lookback_months: 1,
            lookahead_years: 1,
        }
    }
}

impl WeekStartPolicy {
    /// Check that `week_start` is a Monday within
    /// `[today - lookback_months, today + lookahead_years]`.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidWeekStart` describing the first rule
    /// broken.
    pub fn validate(&self, week_start: NaiveDate, today: NaiveDate) -> Result<()> {
        let invalid = |reason: String| ScheduleError::InvalidWeekStart { week_start, reason };

        if week_start.weekday() != Weekday::Mon {
            return Err(invalid(format!(
                "week must start on a Monday, got {}",
                week_start.weekday()
            )));
        }

        let earliest = today
            .checked_sub_months(Months::new(self.lookback_months))
            .unwrap_or(NaiveDate::MIN);
        if week_start < earliest {
            return Err(invalid(format!(
                "more than {} month(s) before {}",
                self.lookback_months, today
            )));
        }

        let latest = today
            .checked_add_months(Months::new(self.lookahead_years.saturating_mul(12)))
            .unwrap_or(NaiveDate::MAX);
        if week_start > latest {
            return Err(invalid(format!(
                "more than {} year(s) after {}",
                self.lookahead_years, today
            )));
        }

        Ok(())
    }
}

/// A request for one animal's schedule over one week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyScheduleQuery {
    animal_id: String,
    week_start: NaiveDate,
}

impl WeeklyScheduleQuery {
    /// Build a query, validating the week start against `policy`.
    pub fn new(
        animal_id: impl Into<String>,
        week_start: NaiveDate,
        today: NaiveDate,
        policy: &WeekStartPolicy,
    ) -> Result<Self> {
        policy.validate(week_start, today)?;
        Ok(Self::from_validated(animal_id, week_start))
    }

    /// Build a query whose week start was already validated by the caller.
    pub fn from_validated(animal_id: impl Into<String>, week_start: NaiveDate) -> Self {
        WeeklyScheduleQuery {
            animal_id: animal_id.into(),
            week_start,
        }
    }

    pub fn animal_id(&self) -> &str {
        &self.animal_id
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }
}
