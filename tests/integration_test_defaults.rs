use chrono::{Datelike, Duration, NaiveDate, Weekday};

use zenexotics_client::domain::models::availability::{
    AvailabilityChange, DayStatus, DayTemplate, DefaultSettings, ALL_SERVICES,
};
use zenexotics_client::domain::services::calendar::AvailabilityCalendar;
use zenexotics_client::domain::services::defaults::apply_default_settings;

// A Monday, so weekday arithmetic in the assertions stays readable.
fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

fn all_day_unavailable() -> DayTemplate {
    DayTemplate {
        is_unavailable: true,
        is_all_day: true,
        ..DayTemplate::default()
    }
}

#[test]
fn open_ended_template_covers_a_year_of_weekdays() {
    let mut calendar = AvailabilityCalendar::new();
    let settings = DefaultSettings {
        monday: all_day_unavailable(),
        ..DefaultSettings::default()
    };

    apply_default_settings(&mut calendar, &settings, today());

    let horizon = today() + Duration::days(366);
    let mut mondays = 0;
    for (date, status) in calendar.marked_days() {
        assert!(*date >= today() && *date <= horizon);
        if date.weekday() == Weekday::Mon {
            assert_eq!(*status, DayStatus::FullyUnavailable);
            mondays += 1;
        }
    }
    assert!(mondays >= 52, "expected at least 52 Mondays, got {mondays}");
}

#[test]
fn explicit_end_date_bounds_the_walk() {
    let mut calendar = AvailabilityCalendar::new();
    let settings = DefaultSettings {
        tuesday: DayTemplate {
            end_date: Some(today() + Duration::days(14)),
            ..all_day_unavailable()
        },
        ..DefaultSettings::default()
    };

    apply_default_settings(&mut calendar, &settings, today());

    let tuesdays = calendar
        .marked_days()
        .keys()
        .filter(|d| d.weekday() == Weekday::Tue)
        .count();
    assert_eq!(tuesdays, 2);
}

#[test]
fn end_date_before_today_applies_nothing_for_that_weekday() {
    let mut calendar = AvailabilityCalendar::new();
    let settings = DefaultSettings {
        friday: DayTemplate {
            end_date: Some(today() - Duration::days(1)),
            ..all_day_unavailable()
        },
        ..DefaultSettings::default()
    };

    apply_default_settings(&mut calendar, &settings, today());

    // The expired Friday template stamps nothing; no day goes grey.
    assert!(calendar
        .marked_days()
        .values()
        .all(|status| *status == DayStatus::Available));
    assert!(calendar
        .marked_days()
        .keys()
        .all(|date| date.weekday() != Weekday::Fri));
}

#[test]
fn partial_template_writes_a_single_window() {
    let mut calendar = AvailabilityCalendar::new();
    let settings = DefaultSettings {
        thursday: DayTemplate {
            is_unavailable: true,
            is_all_day: false,
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            end_date: None,
        },
        ..DefaultSettings::default()
    };

    apply_default_settings(&mut calendar, &settings, today());

    let first_thursday = today() + Duration::days(3);
    assert_eq!(calendar.day_status(first_thursday), DayStatus::PartiallyUnavailable);

    let record = calendar.record(first_thursday).unwrap();
    assert!(record.is_available);
    assert_eq!(record.unavailable_times.len(), 1);
    assert_eq!(record.unavailable_times[0].start_time, "09:00");
    assert_eq!(record.unavailable_times[0].reason, "Default Setting");
}

#[test]
fn available_template_resets_previously_blocked_days() {
    let mut calendar = AvailabilityCalendar::new();

    // Block the first Wednesday by hand, then reset Wednesdays.
    let first_wednesday = today() + Duration::days(2);
    calendar.apply_change(&AvailabilityChange {
        dates: vec![first_wednesday],
        service_types: vec![ALL_SERVICES.to_string()],
        is_available: false,
        is_all_day: true,
        start_time: None,
        end_time: None,
    });
    assert_eq!(calendar.day_status(first_wednesday), DayStatus::FullyUnavailable);

    let settings = DefaultSettings::default();
    apply_default_settings(&mut calendar, &settings, today());

    assert_eq!(calendar.day_status(first_wednesday), DayStatus::Available);
    assert!(calendar.record(first_wednesday).unwrap().unavailable_times.is_empty());
}
