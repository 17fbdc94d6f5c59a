//! Weekly schedule query handler: collaborator reads, then the pure pipeline.
//!
//! ```text
//! raw slots ─▶ normalize ─▶ restrict to week ─┬─▶ available ranges ─┐
//!                                             └─▶ split by kind ────┴─▶ assemble
//! ```

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime};
use tracing::{debug, instrument, warn};

use crate::assembler::assemble_week_schedule;
use crate::availability::{calculate_weekly_available_ranges, DAYS_PER_WEEK};
use crate::error::{Result, ScheduleError};
use crate::hours::OperatingHours;
use crate::normalizer::normalize;
use crate::overlap::find_closure_overlaps;
use crate::ports::{AnimalDirectory, FosteringRegistry, SlotStore};
use crate::query::{Caller, WeeklyScheduleQuery};
use crate::schedule::{Animal, AnimalWeeklySchedule};
use crate::slot::Slot;

/// Answers weekly schedule queries against injected collaborators.
///
/// Holds no per-request state; one handler can serve concurrent queries.
#[derive(Clone)]
pub struct WeeklyScheduleHandler {
    animals: Arc<dyn AnimalDirectory>,
    fosterings: Arc<dyn FosteringRegistry>,
    slots: Arc<dyn SlotStore>,
}

impl WeeklyScheduleHandler {
    pub fn new(
        animals: Arc<dyn AnimalDirectory>,
        fosterings: Arc<dyn FosteringRegistry>,
        slots: Arc<dyn SlotStore>,
    ) -> Self {
        WeeklyScheduleHandler {
            animals,
            fosterings,
            slots,
        }
    }

    /// Use one value for all three collaborator roles.
    pub fn from_store<T>(store: Arc<T>) -> Self
    where
        T: AnimalDirectory + FosteringRegistry + SlotStore + 'static,
    {
        Self::new(store.clone(), store.clone(), store)
    }

    /// Compute the weekly schedule for `query` on behalf of `caller`.
    ///
    /// The animal lookup and the fostering check run concurrently, as do the
    /// two slot loads. Nothing is computed until every read has completed, and
    /// dropping the returned future abandons the query without side effects.
    ///
    /// # Errors
    /// - `AnimalNotFound` if the animal does not exist.
    /// - `NoActiveFostering` if the caller is not actively fostering it; no
    ///   slots are loaded in that case.
    /// - `InvalidOperatingHours` if the shelter opens at or after closing.
    /// - `MalformedSlot` if a loaded slot has `start >= end`.
    /// - Any `Store` error raised by a collaborator.
    #[instrument(
        skip(self, query, caller),
        fields(
            animal_id = %query.animal_id(),
            week_start = %query.week_start(),
            user_id = %caller.user_id,
        )
    )]
    pub async fn handle(
        &self,
        query: &WeeklyScheduleQuery,
        caller: &Caller,
    ) -> Result<AnimalWeeklySchedule> {
        let animal_id = query.animal_id();
        let week_start = query.week_start();

        let (record, fostering) = tokio::try_join!(
            self.animals.find_animal(animal_id),
            self.fosterings
                .has_active_fostering(animal_id, &caller.user_id),
        )?;

        let record = record.ok_or_else(|| ScheduleError::AnimalNotFound(animal_id.to_string()))?;
        if !fostering {
            return Err(ScheduleError::NoActiveFostering {
                animal_id: animal_id.to_string(),
                user_id: caller.user_id.clone(),
            });
        }

        let hours = OperatingHours::new(&record.animal.shelter_id, record.opening, record.closing)?;

        let from = week_start.and_time(NaiveTime::MIN).and_utc();
        let to = from + Duration::days(DAYS_PER_WEEK);
        let (activity_slots, closure_slots) = tokio::try_join!(
            self.slots.load_activity_slots(animal_id, from, to),
            self.slots
                .load_unavailability_slots(&record.animal.shelter_id, from, to),
        )?;

        debug!(
            activity = activity_slots.len(),
            closures = closure_slots.len(),
            "loaded slots"
        );

        let raw: Vec<Slot> = activity_slots
            .into_iter()
            .chain(closure_slots)
            .filter(|slot| slot.kind.participates())
            .collect();

        compute_week_schedule(&raw, &hours, &record.animal, week_start)
    }
}

/// The pure part of a query: normalize, derive availability, assemble.
///
/// Fragments dated outside the week (from slots that start before it or run
/// past it) are dropped after normalization.
pub fn compute_week_schedule(
    raw: &[Slot],
    hours: &OperatingHours,
    animal: &Animal,
    week_start: NaiveDate,
) -> Result<AnimalWeeklySchedule> {
    let normalized = normalize(raw, hours)?.restrict_to_days(week_start, DAYS_PER_WEEK);
    let available = calculate_weekly_available_ranges(&normalized, hours, week_start);
    let (reserved, unavailable) = normalized.split_by_kind();

    for overlap in find_closure_overlaps(&reserved, &unavailable) {
        warn!(
            reservation = %overlap.reservation.id,
            closure = %overlap.closure.id,
            minutes = overlap.overlap_minutes,
            "reservation overlaps a shelter closure"
        );
    }

    Ok(assemble_week_schedule(
        &reserved,
        &unavailable,
        &available,
        animal,
        week_start,
    ))
}
