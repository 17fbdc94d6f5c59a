//! Tests for weekly schedule assembly and the pure compute pipeline.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use shelter_schedule::{
    assemble_week_schedule, calculate_weekly_available_ranges, compute_week_schedule, normalize,
    Animal, OperatingHours, Slot,
};

fn at(day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, min, 0).unwrap()
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

fn time(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

fn hours(open: u32, close: u32) -> OperatingHours {
    OperatingHours::new("sh-1", time(open, 0), time(close, 0)).unwrap()
}

fn animal() -> Animal {
    Animal {
        id: "rex".into(),
        shelter_id: "sh-1".into(),
    }
}

#[test]
fn assembles_seven_days_with_empty_categories() {
    let h = hours(9, 18);
    let normalized = normalize(&[], &h).unwrap();
    let available = calculate_weekly_available_ranges(&normalized, &h, date(4));
    let (reserved, unavailable) = normalized.split_by_kind();

    let schedule = assemble_week_schedule(&reserved, &unavailable, &available, &animal(), date(4));

    assert_eq!(schedule.animal, animal());
    assert_eq!(schedule.shelter_id, "sh-1");
    assert_eq!(schedule.week_start, date(4));
    assert_eq!(schedule.days.len(), 7);
    for (offset, day) in schedule.days.iter().enumerate() {
        assert_eq!(day.date, date(4 + offset as u32));
        assert_eq!(day.available.len(), 1);
        assert!(day.reserved.is_empty());
        assert!(day.unavailable.is_empty());
    }
}

#[test]
fn partitions_slots_and_blocks_by_date() {
    let h = hours(9, 18);
    let normalized = normalize(
        &[
            Slot::activity("r1", "act-1", "u1", at(5, 10, 0), at(5, 11, 0)),
            Slot::activity("r2", "act-2", "u2", at(5, 14, 0), at(5, 15, 0)),
            Slot::closure("c1", "sh-1", Some("Holiday".into()), at(8, 0, 0), at(9, 0, 0)),
        ],
        &h,
    )
    .unwrap();
    let available = calculate_weekly_available_ranges(&normalized, &h, date(4));
    let (reserved, unavailable) = normalized.split_by_kind();

    let schedule = assemble_week_schedule(&reserved, &unavailable, &available, &animal(), date(4));

    let tuesday = schedule.day(date(5)).unwrap();
    let ids: Vec<&str> = tuesday.reserved.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["r1", "r2"]);
    assert_eq!(tuesday.available.len(), 3);
    assert!(tuesday.unavailable.is_empty());

    let friday = schedule.day(date(8)).unwrap();
    assert_eq!(friday.unavailable.len(), 1);
    assert!(friday.available.is_empty());
    assert_eq!(friday.available_minutes(), 0);
}

#[test]
fn entries_outside_the_week_are_not_assembled() {
    let h = hours(9, 18);
    let normalized = normalize(
        &[Slot::closure("c1", "sh-1", None, at(11, 9, 0), at(11, 10, 0))],
        &h,
    )
    .unwrap();
    let (reserved, unavailable) = normalized.split_by_kind();

    let schedule = assemble_week_schedule(&reserved, &unavailable, &[], &animal(), date(4));

    assert!(schedule.days.iter().all(|d| d.unavailable.is_empty()));
}

#[test]
fn compute_keeps_overlapping_reservation_and_closure_visible() {
    let h = hours(9, 18);
    let raw = vec![
        Slot::activity("r1", "act-1", "u1", at(4, 10, 0), at(4, 12, 0)),
        Slot::closure("c1", "sh-1", None, at(4, 11, 0), at(4, 13, 0)),
    ];

    let schedule = compute_week_schedule(&raw, &h, &animal(), date(4)).unwrap();

    let monday = &schedule.days[0];
    assert_eq!(monday.reserved.len(), 1);
    assert_eq!(monday.unavailable.len(), 1);
    let spans: Vec<(NaiveTime, NaiveTime)> =
        monday.available.iter().map(|b| (b.start, b.end)).collect();
    assert_eq!(spans, vec![(time(9, 0), time(10, 0)), (time(13, 0), time(18, 0))]);
}

#[test]
fn compute_drops_fragments_before_the_week() {
    let h = hours(9, 18);
    // Starts on the Sunday before the week, ends Monday 10:00.
    let raw = vec![Slot::closure("c1", "sh-1", None, at(3, 12, 0), at(4, 10, 0))];

    let schedule = compute_week_schedule(&raw, &h, &animal(), date(4)).unwrap();

    let monday = &schedule.days[0];
    assert_eq!(monday.unavailable.len(), 1);
    assert_eq!(monday.unavailable[0].start, at(4, 9, 0));
    assert_eq!(monday.unavailable[0].end, at(4, 10, 0));
    let total_closures: usize = schedule.days.iter().map(|d| d.unavailable.len()).sum();
    assert_eq!(total_closures, 1);
}

#[test]
fn schedule_serializes_dates_and_times_as_strings() {
    let h = hours(8, 20);
    let schedule = compute_week_schedule(&[], &h, &animal(), date(4)).unwrap();

    let json = serde_json::to_value(&schedule).unwrap();

    assert_eq!(json["week_start"], "2024-03-04");
    assert_eq!(json["days"][0]["available"][0]["start"], "08:00:00");
    assert_eq!(json["days"][0]["available"][0]["end"], "20:00:00");
    assert_eq!(json["days"][6]["date"], "2024-03-10");
    assert!(json["days"][3]["reserved"].as_array().unwrap().is_empty());
}
