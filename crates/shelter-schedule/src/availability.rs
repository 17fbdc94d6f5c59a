//! Derive available time blocks from normalized slots.
//!
//! For each day, occupied fragments are merged into maximal spans regardless
//! of what occupies them, then the gaps between those spans inside the day's
//! operating window become available blocks.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::hours::OperatingHours;
use crate::normalizer::NormalizedSlots;
use crate::slot::Slot;

/// Number of days covered by a weekly schedule.
pub const DAYS_PER_WEEK: i64 = 7;

/// An available interval within a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub duration_minutes: i64,
}

impl TimeBlock {
    /// Build a block from two instants on the same UTC day.
    fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        TimeBlock {
            date: start.date_naive(),
            start: start.time(),
            end: end.time(),
            duration_minutes: (end - start).num_minutes(),
        }
    }

    pub fn start_at(&self) -> DateTime<Utc> {
        self.date.and_time(self.start).and_utc()
    }

    pub fn end_at(&self) -> DateTime<Utc> {
        self.date.and_time(self.end).and_utc()
    }
}

/// Merge overlapping or touching slots into occupied spans, clipped to the
/// given window.
///
/// Returns a sorted, non-overlapping list of (start, end) intervals.
pub fn merge_occupied_spans<'a, I>(
    slots: I,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
) -> Vec<(DateTime<Utc>, DateTime<Utc>)>
where
    I: IntoIterator<Item = &'a Slot>,
{
    let mut intervals: Vec<(DateTime<Utc>, DateTime<Utc>)> = slots
        .into_iter()
        .filter(|s| s.start < window_end && s.end > window_start)
        .map(|s| (s.start.max(window_start), s.end.min(window_end)))
        .collect();

    if intervals.is_empty() {
        return Vec::new();
    }

    intervals.sort_by_key(|&(start, end)| (start, end));

    let mut merged: Vec<(DateTime<Utc>, DateTime<Utc>)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Available blocks on one day: the operating window minus occupied spans.
pub fn available_blocks_on(
    slots: &NormalizedSlots,
    hours: &OperatingHours,
    date: NaiveDate,
) -> Vec<TimeBlock> {
    let (open, close) = hours.window_on(date);
    let merged = merge_occupied_spans(slots.on(date), open, close);

    let mut blocks = Vec::new();
    let mut cursor = open;

    for (busy_start, busy_end) in &merged {
        if cursor < *busy_start {
            blocks.push(TimeBlock::between(cursor, *busy_start));
        }
        cursor = cursor.max(*busy_end);
    }

    if cursor < close {
        blocks.push(TimeBlock::between(cursor, close));
    }

    blocks
}

/// Available blocks for the seven days starting at `week_start`, in date and
/// then time order.
///
/// A day with nothing occupied yields one block spanning the whole operating
/// window; a fully occupied day yields none.
pub fn calculate_weekly_available_ranges(
    slots: &NormalizedSlots,
    hours: &OperatingHours,
    week_start: NaiveDate,
) -> Vec<TimeBlock> {
    (0..DAYS_PER_WEEK)
        .flat_map(|offset| available_blocks_on(slots, hours, week_start + Duration::days(offset)))
        .collect()
}

/// Find the first block of at least `min_duration_minutes`.
pub fn find_first_available_block(
    blocks: &[TimeBlock],
    min_duration_minutes: i64,
) -> Option<&TimeBlock> {
    blocks
        .iter()
        .find(|block| block.duration_minutes >= min_duration_minutes)
}
