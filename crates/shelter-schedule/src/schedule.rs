//! Weekly schedule result types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::availability::TimeBlock;
use crate::slot::Slot;

/// The animal a schedule is computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: String,
    pub shelter_id: String,
}

/// One calendar day of a weekly schedule. Every list is present, possibly
/// empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySchedule {
    pub date: NaiveDate,
    pub available: Vec<TimeBlock>,
    pub reserved: Vec<Slot>,
    pub unavailable: Vec<Slot>,
}

impl DailySchedule {
    pub fn available_minutes(&self) -> i64 {
        self.available.iter().map(|b| b.duration_minutes).sum()
    }
}

/// Seven consecutive days of availability for one animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalWeeklySchedule {
    pub animal: Animal,
    pub shelter_id: String,
    pub week_start: NaiveDate,
    pub days: Vec<DailySchedule>,
}

impl AnimalWeeklySchedule {
    pub fn day(&self, date: NaiveDate) -> Option<&DailySchedule> {
        self.days.iter().find(|d| d.date == date)
    }
}
