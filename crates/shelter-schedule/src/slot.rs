//! The slot model: typed time intervals shared by every scheduling stage.
//!
//! A [`Slot`] is a half-open `[start, end)` interval in UTC. What blocks the
//! interval is carried by [`SlotKind`]: either a reservation made for an
//! animal activity, or a shelter-wide closure.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Lifecycle of the activity that owns a reservation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActivityStatus {
    #[default]
    Active,
    Cancelled,
    Completed,
}

/// Status of a shelter unavailability entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnavailabilityStatus {
    #[default]
    Unavailable,
    /// The closure was withdrawn; kept for history only.
    Available,
}

/// Variant tag of a slot. Ordering puts activities before closures, which is
/// the tie-break used when sorting normalized slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SlotDiscriminator {
    Activity,
    ShelterUnavailability,
}

/// What occupies a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlotKind {
    /// Reservation tied to a visit/fostering activity for the animal.
    Activity {
        activity_id: String,
        user_id: String,
        status: ActivityStatus,
    },
    /// Shelter-wide closure (holiday, maintenance, ...).
    ShelterUnavailability {
        shelter_id: String,
        status: UnavailabilityStatus,
        reason: Option<String>,
    },
}

impl SlotKind {
    pub fn discriminator(&self) -> SlotDiscriminator {
        match self {
            SlotKind::Activity { .. } => SlotDiscriminator::Activity,
            SlotKind::ShelterUnavailability { .. } => SlotDiscriminator::ShelterUnavailability,
        }
    }

    /// Whether a slot of this kind blocks time at all. Cancelled or completed
    /// activities and withdrawn closures are inert.
    pub fn participates(&self) -> bool {
        match self {
            SlotKind::Activity { status, .. } => *status == ActivityStatus::Active,
            SlotKind::ShelterUnavailability { status, .. } => {
                *status == UnavailabilityStatus::Unavailable
            }
        }
    }
}

/// A typed `[start, end)` interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// The slot's own identifier, used as the final ordering tie-break.
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: SlotKind,
}

impl Slot {
    /// An active reservation slot.
    pub fn activity(
        id: impl Into<String>,
        activity_id: impl Into<String>,
        user_id: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Slot {
            id: id.into(),
            start,
            end,
            kind: SlotKind::Activity {
                activity_id: activity_id.into(),
                user_id: user_id.into(),
                status: ActivityStatus::Active,
            },
        }
    }

    /// A shelter closure slot with `Unavailable` status.
    pub fn closure(
        id: impl Into<String>,
        shelter_id: impl Into<String>,
        reason: Option<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Slot {
            id: id.into(),
            start,
            end,
            kind: SlotKind::ShelterUnavailability {
                shelter_id: shelter_id.into(),
                status: UnavailabilityStatus::Unavailable,
                reason,
            },
        }
    }

    pub fn discriminator(&self) -> SlotDiscriminator {
        self.kind.discriminator()
    }

    pub fn is_activity(&self) -> bool {
        self.discriminator() == SlotDiscriminator::Activity
    }

    pub fn is_unavailability(&self) -> bool {
        self.discriminator() == SlotDiscriminator::ShelterUnavailability
    }

    /// Calendar date (UTC) on which the slot starts. For normalized fragments
    /// this is the only date the fragment touches.
    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether the half-open intervals intersect. Touching slots do not.
    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether the slot intersects the half-open window `[from, to)`.
    pub fn intersects(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> bool {
        self.start < to && from < self.end
    }

    /// Reject zero-length or inverted intervals.
    pub fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(ScheduleError::MalformedSlot {
                slot_id: self.id.clone(),
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// A copy of this slot with new bounds and the same identity.
    pub(crate) fn fragment(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Slot {
        Slot {
            id: self.id.clone(),
            start,
            end,
            kind: self.kind.clone(),
        }
    }
}
