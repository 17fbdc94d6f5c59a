//! Slot normalization: clip raw slots to operating hours and split them at day
//! boundaries.
//!
//! Distinct slots are never merged here, even when they touch or overlap.
//! Callers downstream (the schedule assembler, a UI) need to see every
//! reservation and closure individually; cause-agnostic merging happens only
//! when free time is derived in [`crate::availability`].

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::hours::OperatingHours;
use crate::slot::Slot;

/// Sorted, day-bounded slot fragments. Only [`normalize`] builds one from raw
/// input, so every fragment lies within a single day's operating window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedSlots {
    slots: Vec<Slot>,
}

impl NormalizedSlots {
    pub fn as_slice(&self) -> &[Slot] {
        &self.slots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fragments falling on `date`, in normalized order.
    pub fn on(&self, date: NaiveDate) -> impl Iterator<Item = &Slot> + '_ {
        self.slots.iter().filter(move |slot| slot.date() == date)
    }

    /// Split into (activity reservations, shelter closures), each keeping the
    /// normalized order.
    pub fn split_by_kind(&self) -> (NormalizedSlots, NormalizedSlots) {
        let (reserved, unavailable): (Vec<Slot>, Vec<Slot>) =
            self.slots.iter().cloned().partition(Slot::is_activity);
        (
            NormalizedSlots { slots: reserved },
            NormalizedSlots { slots: unavailable },
        )
    }

    /// Keep only the fragments dated within `[first_day, first_day + days)`.
    pub fn restrict_to_days(&self, first_day: NaiveDate, days: i64) -> NormalizedSlots {
        let last_day = first_day + Duration::days(days);
        NormalizedSlots {
            slots: self
                .slots
                .iter()
                .filter(|slot| slot.date() >= first_day && slot.date() < last_day)
                .cloned()
                .collect(),
        }
    }

    pub fn into_vec(self) -> Vec<Slot> {
        self.slots
    }
}

impl<'a> IntoIterator for &'a NormalizedSlots {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

/// Normalize raw slots against the shelter's daily operating window.
///
/// Each slot is split into one fragment per UTC calendar day it touches, and
/// each fragment is intersected with that day's `[opening, closing)` window.
/// Fragments left with no duration are dropped. The result is sorted by start
/// instant, then activities before closures, then by slot id.
///
/// # Errors
/// Returns `ScheduleError::MalformedSlot` for the first slot whose
/// `start >= end`. Nothing is coerced or silently skipped.
pub fn normalize(slots: &[Slot], hours: &OperatingHours) -> Result<NormalizedSlots> {
    let mut fragments = Vec::with_capacity(slots.len());

    for slot in slots {
        slot.validate()?;
        clip_to_hours(slot, hours, &mut fragments);
    }

    fragments.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.discriminator().cmp(&b.discriminator()))
            .then_with(|| a.id.cmp(&b.id))
            .then_with(|| a.end.cmp(&b.end))
    });

    debug!(
        input = slots.len(),
        fragments = fragments.len(),
        "normalized slots"
    );

    Ok(NormalizedSlots { slots: fragments })
}

/// Push one clipped fragment per day the slot touches.
fn clip_to_hours(slot: &Slot, hours: &OperatingHours, out: &mut Vec<Slot>) {
    let last_day = slot.end.date_naive();
    let mut day = slot.start.date_naive();

    loop {
        let (open, close) = hours.window_on(day);
        let start = slot.start.max(open);
        let end = slot.end.min(close);
        if start < end {
            out.push(slot.fragment(start, end));
        }

        if day >= last_day {
            break;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
}
