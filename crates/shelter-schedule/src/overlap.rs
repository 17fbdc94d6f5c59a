//! Report reservations that collide with shelter closures.
//!
//! Normalization keeps a reservation and a closure covering the same time as
//! two separate fragments; both simply count as occupied. This module names
//! those collisions so they can be surfaced to staff. Adjacent intervals
//! (one ends exactly when the other starts) are NOT overlaps.

use serde::Serialize;

use crate::normalizer::NormalizedSlots;
use crate::slot::Slot;

/// A reservation fragment overlapping a closure fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosureOverlap {
    pub reservation: Slot,
    pub closure: Slot,
    pub overlap_minutes: i64,
}

/// Find all pairwise overlaps between reservation and closure fragments.
///
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
/// Slots of the wrong kind in either input are ignored.
pub fn find_closure_overlaps(
    reserved: &NormalizedSlots,
    unavailable: &NormalizedSlots,
) -> Vec<ClosureOverlap> {
    let mut overlaps = Vec::new();

    for reservation in reserved.iter().filter(|s| s.is_activity()) {
        for closure in unavailable.iter().filter(|s| s.is_unavailability()) {
            if reservation.overlaps(closure) {
                let overlap_start = reservation.start.max(closure.start);
                let overlap_end = reservation.end.min(closure.end);

                overlaps.push(ClosureOverlap {
                    reservation: reservation.clone(),
                    closure: closure.clone(),
                    overlap_minutes: (overlap_end - overlap_start).num_minutes(),
                });
            }
        }
    }

    overlaps
}
