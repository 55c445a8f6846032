use chrono::NaiveDate;

use zenexotics_client::domain::models::availability::{
    AvailabilityChange, DayStatus, ALL_SERVICES,
};
use zenexotics_client::domain::services::calendar::{
    date_range_inclusive, AvailabilityCalendar, DateRangeSelection, SelectionEvent, SelectionMode,
};
use zenexotics_client::infra::mock::fixtures::seed_availability;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
}

fn change(
    dates: &[NaiveDate],
    service_types: &[&str],
    is_available: bool,
    is_all_day: bool,
    window: Option<(&str, &str)>,
) -> AvailabilityChange {
    AvailabilityChange {
        dates: dates.to_vec(),
        service_types: service_types.iter().map(|s| s.to_string()).collect(),
        is_available,
        is_all_day,
        start_time: window.map(|(s, _)| s.to_string()),
        end_time: window.map(|(_, e)| e.to_string()),
    }
}

#[test]
fn ingest_colors_the_seeded_calendar() {
    let mut calendar = AvailabilityCalendar::new();
    calendar.ingest(&seed_availability());

    assert_eq!(calendar.day_status(day(1)), DayStatus::Available);
    assert_eq!(calendar.day_status(day(4)), DayStatus::FullyUnavailable);
    assert_eq!(calendar.day_status(day(5)), DayStatus::PartiallyUnavailable);
    assert_eq!(calendar.day_status(day(6)), DayStatus::Booked);
    assert_eq!(calendar.day_status(day(25)), DayStatus::Available);

    let booked = calendar.record(day(6)).unwrap();
    assert_eq!(booked.unavailable_times.len(), 4);
    assert!(booked.unavailable_times[0].reason.contains("Booked with Charlie"));
}

#[test]
fn two_taps_complete_an_inclusive_ascending_range() {
    let mut selection = DateRangeSelection::new(SelectionMode::MultiDay);

    assert_eq!(selection.press(day(10)), SelectionEvent::Anchored(day(10)));
    let completed = selection.press(day(13));
    assert_eq!(
        completed,
        SelectionEvent::Completed(vec![day(10), day(11), day(12), day(13)])
    );

    // A tap after a completed range starts a new one.
    assert_eq!(selection.press(day(20)), SelectionEvent::Anchored(day(20)));
}

#[test]
fn single_day_mode_completes_immediately() {
    let mut selection = DateRangeSelection::new(SelectionMode::SingleDay);
    assert_eq!(
        selection.press(day(10)),
        SelectionEvent::Completed(vec![day(10)])
    );
}

#[test]
fn reversed_range_is_empty() {
    assert!(date_range_inclusive(day(13), day(10)).is_empty());
}

#[test]
fn all_day_block_covering_every_service_goes_grey() {
    let mut calendar = AvailabilityCalendar::new();
    calendar.apply_change(&change(&[day(10)], &[ALL_SERVICES], false, true, None));

    assert_eq!(calendar.day_status(day(10)), DayStatus::FullyUnavailable);
    let record = calendar.record(day(10)).unwrap();
    assert!(!record.is_available);
    assert!(record.unavailable_times[0].is_all_day());
}

#[test]
fn all_day_block_for_a_subset_stays_olive() {
    let mut calendar = AvailabilityCalendar::new();
    calendar.apply_change(&change(&[day(10)], &["Dog Walking"], false, true, None));

    assert_eq!(calendar.day_status(day(10)), DayStatus::PartiallyUnavailable);
    assert!(calendar.record(day(10)).unwrap().is_available);
}

#[test]
fn removing_one_window_leaves_the_rest() {
    let mut calendar = AvailabilityCalendar::new();
    calendar.apply_change(&change(&[day(10)], &["Dog Walking"], false, false, Some(("10:00", "12:00"))));
    calendar.apply_change(&change(&[day(10)], &["Dog Walking"], false, false, Some(("14:00", "16:00"))));
    assert_eq!(calendar.record(day(10)).unwrap().unavailable_times.len(), 2);

    calendar.apply_change(&change(&[day(10)], &["Dog Walking"], true, false, Some(("10:00", "12:00"))));
    let record = calendar.record(day(10)).unwrap();
    assert_eq!(record.unavailable_times.len(), 1);
    assert_eq!(record.unavailable_times[0].start_time, "14:00");
    assert_eq!(calendar.day_status(day(10)), DayStatus::PartiallyUnavailable);

    calendar.apply_change(&change(&[day(10)], &["Dog Walking"], true, false, Some(("14:00", "16:00"))));
    assert!(calendar.record(day(10)).unwrap().unavailable_times.is_empty());
    assert_eq!(calendar.day_status(day(10)), DayStatus::Available);
}

#[test]
fn removing_a_window_that_never_existed_changes_nothing() {
    let mut calendar = AvailabilityCalendar::new();
    calendar.apply_change(&change(&[day(10)], &["Dog Walking"], false, false, Some(("10:00", "12:00"))));

    calendar.apply_change(&change(&[day(10)], &["Dog Walking"], true, false, Some(("08:00", "09:00"))));
    let record = calendar.record(day(10)).unwrap();
    assert_eq!(record.unavailable_times.len(), 1);
    assert_eq!(calendar.day_status(day(10)), DayStatus::PartiallyUnavailable);
}

#[test]
fn multi_date_changes_touch_every_date_in_the_range() {
    let mut calendar = AvailabilityCalendar::new();
    let dates = date_range_inclusive(day(10), day(12));
    calendar.apply_change(&change(&dates, &[ALL_SERVICES], false, true, None));

    for d in dates {
        assert_eq!(calendar.day_status(d), DayStatus::FullyUnavailable);
    }

    // An empty date list is a no-op.
    let before = calendar.marked_days().len();
    calendar.apply_change(&change(&[], &[ALL_SERVICES], false, true, None));
    assert_eq!(calendar.marked_days().len(), before);
}
