use chrono::{Datelike, Duration, Months, NaiveDate, Weekday};

use crate::domain::models::availability::{
    AvailabilityRecord, DayStatus, DayTemplate, DefaultSettings, UnavailableTime,
};
use crate::domain::services::calendar::AvailabilityCalendar;

const DEFAULT_SETTING: &str = "Default Setting";

fn one_year_out(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_months(Months::new(12))
        .unwrap_or(today + Duration::days(365))
}

fn apply_template(calendar: &mut AvailabilityCalendar, date: NaiveDate, template: &DayTemplate) {
    if template.is_unavailable {
        if template.is_all_day {
            calendar.set_day(
                date,
                AvailabilityRecord {
                    is_available: false,
                    unavailable_times: vec![UnavailableTime::all_day(DEFAULT_SETTING)],
                },
                DayStatus::FullyUnavailable,
            );
        } else {
            calendar.set_day(
                date,
                AvailabilityRecord {
                    is_available: true,
                    unavailable_times: vec![UnavailableTime {
                        start_time: template.start_time.clone(),
                        end_time: template.end_time.clone(),
                        reason: DEFAULT_SETTING.to_string(),
                        client_id: None,
                    }],
                },
                DayStatus::PartiallyUnavailable,
            );
        }
    } else {
        calendar.set_day(
            date,
            AvailabilityRecord {
                is_available: true,
                unavailable_times: Vec::new(),
            },
            DayStatus::Available,
        );
    }
}

/// Walks every calendar day from `today` through each template's end
/// date (or one year out) and stamps matching weekdays with that
/// weekday's template. The walk is all-or-nothing in memory; there are
/// no partial-failure semantics.
pub fn apply_default_settings(
    calendar: &mut AvailabilityCalendar,
    settings: &DefaultSettings,
    today: NaiveDate,
) {
    let horizon = one_year_out(today);

    let per_day: [(Weekday, &DayTemplate); 7] = [
        (Weekday::Mon, &settings.monday),
        (Weekday::Tue, &settings.tuesday),
        (Weekday::Wed, &settings.wednesday),
        (Weekday::Thu, &settings.thursday),
        (Weekday::Fri, &settings.friday),
        (Weekday::Sat, &settings.saturday),
        (Weekday::Sun, &settings.sunday),
    ];

    for (weekday, template) in per_day {
        let end = template.end_date.unwrap_or(horizon);
        let mut current = today;
        while current <= end {
            if current.weekday() == weekday {
                apply_template(calendar, current, template);
            }
            current = match current.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
    }
}
