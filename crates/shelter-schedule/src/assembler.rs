//! Package available blocks and normalized slots into a weekly schedule.

use chrono::{Duration, NaiveDate};

use crate::availability::{TimeBlock, DAYS_PER_WEEK};
use crate::normalizer::NormalizedSlots;
use crate::schedule::{Animal, AnimalWeeklySchedule, DailySchedule};

/// Partition the inputs by date into seven [`DailySchedule`]s.
///
/// Pure assembly: entries dated outside the week are left out, input order is
/// kept within a day, and a day with nothing in a category gets an empty list.
pub fn assemble_week_schedule(
    reserved: &NormalizedSlots,
    unavailable: &NormalizedSlots,
    available: &[TimeBlock],
    animal: &Animal,
    week_start: NaiveDate,
) -> AnimalWeeklySchedule {
    let days = (0..DAYS_PER_WEEK)
        .map(|offset| {
            let date = week_start + Duration::days(offset);
            DailySchedule {
                date,
                available: available
                    .iter()
                    .filter(|block| block.date == date)
                    .cloned()
                    .collect(),
                reserved: reserved.on(date).cloned().collect(),
                unavailable: unavailable.on(date).cloned().collect(),
            }
        })
        .collect();

    AnimalWeeklySchedule {
        animal: animal.clone(),
        shelter_id: animal.shelter_id.clone(),
        week_start,
        days,
    }
}
