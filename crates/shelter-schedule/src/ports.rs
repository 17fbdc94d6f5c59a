//! Collaborator interfaces the query handler reads from.
//!
//! Implementations own persistence, retries and timeouts. The handler only
//! reads, so an implementation never sees a write from this crate.

use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schedule::Animal;
use crate::slot::Slot;

/// An animal together with its shelter's daily opening and closing times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub animal: Animal,
    pub opening: NaiveTime,
    pub closing: NaiveTime,
}

#[async_trait]
pub trait AnimalDirectory: Send + Sync {
    /// Look up an animal and its shelter hours. `Ok(None)` when unknown.
    async fn find_animal(&self, animal_id: &str) -> Result<Option<AnimalRecord>>;
}

#[async_trait]
pub trait FosteringRegistry: Send + Sync {
    async fn has_active_fostering(&self, animal_id: &str, user_id: &str) -> Result<bool>;
}

#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Activity slots for `animal_id` with `Active` status intersecting
    /// `[from, to)`.
    async fn load_activity_slots(
        &self,
        animal_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Slot>>;

    /// Closure slots for `shelter_id` with `Unavailable` status intersecting
    /// `[from, to)`.
    async fn load_unavailability_slots(
        &self,
        shelter_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Slot>>;
}
