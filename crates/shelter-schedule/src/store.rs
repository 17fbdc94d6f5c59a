//! In-memory collaborator backed by a JSON snapshot.
//!
//! Serves the CLI and tests. Queries apply the same half-open intersection and
//! status filtering a real backing store is expected to apply.

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::ports::{AnimalDirectory, AnimalRecord, FosteringRegistry, SlotStore};
use crate::schedule::Animal;
use crate::slot::{ActivityStatus, Slot, SlotKind, UnavailabilityStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelterEntry {
    pub id: String,
    pub opening: NaiveTime,
    pub closing: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FosteringEntry {
    pub animal_id: String,
    pub user_id: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySlotEntry {
    pub id: String,
    pub animal_id: String,
    pub activity_id: String,
    pub user_id: String,
    #[serde(default)]
    pub status: ActivityStatus,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ActivitySlotEntry {
    fn to_slot(&self) -> Slot {
        Slot {
            id: self.id.clone(),
            start: self.start,
            end: self.end,
            kind: SlotKind::Activity {
                activity_id: self.activity_id.clone(),
                user_id: self.user_id.clone(),
                status: self.status,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailabilitySlotEntry {
    pub id: String,
    pub shelter_id: String,
    #[serde(default)]
    pub status: UnavailabilityStatus,
    #[serde(default)]
    pub reason: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl UnavailabilitySlotEntry {
    fn to_slot(&self) -> Slot {
        Slot {
            id: self.id.clone(),
            start: self.start,
            end: self.end,
            kind: SlotKind::ShelterUnavailability {
                shelter_id: self.shelter_id.clone(),
                status: self.status,
                reason: self.reason.clone(),
            },
        }
    }
}

/// Everything the handler can read, as one serializable document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub shelters: Vec<ShelterEntry>,
    #[serde(default)]
    pub animals: Vec<Animal>,
    #[serde(default)]
    pub fosterings: Vec<FosteringEntry>,
    #[serde(default)]
    pub activity_slots: Vec<ActivitySlotEntry>,
    #[serde(default)]
    pub unavailability_slots: Vec<UnavailabilitySlotEntry>,
}

/// Read-only store over a [`StoreSnapshot`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    snapshot: StoreSnapshot,
}

impl InMemoryStore {
    pub fn new(snapshot: StoreSnapshot) -> Self {
        InMemoryStore { snapshot }
    }

    /// Parse a JSON snapshot.
    ///
    /// # Errors
    /// Returns `ScheduleError::Store` if the document does not match
    /// [`StoreSnapshot`].
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: StoreSnapshot = serde_json::from_str(json)
            .map_err(|e| ScheduleError::Store(format!("invalid snapshot: {}", e)))?;
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> &StoreSnapshot {
        &self.snapshot
    }
}

#[async_trait]
impl AnimalDirectory for InMemoryStore {
    async fn find_animal(&self, animal_id: &str) -> Result<Option<AnimalRecord>> {
        let Some(animal) = self.snapshot.animals.iter().find(|a| a.id == animal_id) else {
            return Ok(None);
        };

        let shelter = self
            .snapshot
            .shelters
            .iter()
            .find(|s| s.id == animal.shelter_id)
            .ok_or_else(|| {
                ScheduleError::Store(format!(
                    "shelter {} of animal {} is missing",
                    animal.shelter_id, animal.id
                ))
            })?;

        Ok(Some(AnimalRecord {
            animal: animal.clone(),
            opening: shelter.opening,
            closing: shelter.closing,
        }))
    }
}

#[async_trait]
impl FosteringRegistry for InMemoryStore {
    async fn has_active_fostering(&self, animal_id: &str, user_id: &str) -> Result<bool> {
        Ok(self
            .snapshot
            .fosterings
            .iter()
            .any(|f| f.active && f.animal_id == animal_id && f.user_id == user_id))
    }
}

#[async_trait]
impl SlotStore for InMemoryStore {
    async fn load_activity_slots(
        &self,
        animal_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Slot>> {
        Ok(self
            .snapshot
            .activity_slots
            .iter()
            .filter(|e| e.animal_id == animal_id && e.status == ActivityStatus::Active)
            .map(ActivitySlotEntry::to_slot)
            .filter(|slot| slot.intersects(from, to))
            .collect())
    }

    async fn load_unavailability_slots(
        &self,
        shelter_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Slot>> {
        Ok(self
            .snapshot
            .unavailability_slots
            .iter()
            .filter(|e| e.shelter_id == shelter_id && e.status == UnavailabilityStatus::Unavailable)
            .map(UnavailabilitySlotEntry::to_slot)
            .filter(|slot| slot.intersects(from, to))
            .collect())
    }
}
