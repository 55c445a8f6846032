use chrono::NaiveDate;

use zenexotics_client::domain::models::booking::{
    AdditionalRate, Occurrence, OccurrenceRates, TimeUnit,
};
use zenexotics_client::domain::services::costs::{
    calculate_occurrence_cost, occurrence_time_units, summarize_costs,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 12, d).unwrap()
}

fn occurrence(
    start_day: u32,
    end_day: u32,
    start_time: &str,
    end_time: &str,
    base: f64,
    unit: TimeUnit,
    extras: &[(&str, f64)],
) -> Occurrence {
    Occurrence {
        id: format!("occ-{start_day}"),
        start_date: day(start_day),
        end_date: day(end_day),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        rates: OccurrenceRates {
            base_rate: base,
            additional_rates: extras
                .iter()
                .map(|(name, amount)| AdditionalRate {
                    name: name.to_string(),
                    amount: *amount,
                })
                .collect(),
            time_unit: unit,
        },
    }
}

#[test]
fn time_units_never_drop_below_one() {
    let units = [
        TimeUnit::FifteenMin,
        TimeUnit::ThirtyMin,
        TimeUnit::FortyFiveMin,
        TimeUnit::OneHour,
        TimeUnit::TwoHour,
        TimeUnit::FourHour,
        TimeUnit::EightHour,
        TimeUnit::TwentyFourHour,
        TimeUnit::Overnight,
        TimeUnit::PerDay,
        TimeUnit::PerVisit,
    ];

    for unit in units {
        let o = occurrence(6, 6, "14:00", "14:05", 10.0, unit, &[]);
        assert!(
            occurrence_time_units(&o).unwrap() >= 1,
            "unit {unit:?} billed below one unit"
        );
    }
}

#[test]
fn flat_units_ignore_the_span() {
    let long_visit = occurrence(6, 8, "08:00", "20:00", 30.0, TimeUnit::PerVisit, &[]);
    assert_eq!(occurrence_time_units(&long_visit).unwrap(), 1);

    let overnight = occurrence(6, 7, "20:00", "08:00", 50.0, TimeUnit::Overnight, &[]);
    assert_eq!(occurrence_time_units(&overnight).unwrap(), 1);
}

#[test]
fn three_hours_at_25_plus_one_extra_is_85() {
    let o = occurrence(6, 6, "09:00", "12:00", 25.0, TimeUnit::OneHour, &[("Premium Package", 10.0)]);
    assert_eq!(occurrence_time_units(&o).unwrap(), 3);
    assert_eq!(calculate_occurrence_cost(&o).unwrap(), 85.0);
}

#[test]
fn partial_hours_round_up_to_the_next_unit() {
    let o = occurrence(6, 6, "09:00", "11:01", 25.0, TimeUnit::OneHour, &[]);
    assert_eq!(occurrence_time_units(&o).unwrap(), 3);
    assert_eq!(calculate_occurrence_cost(&o).unwrap(), 75.0);
}

#[test]
fn multi_day_spans_count_across_midnight() {
    let o = occurrence(6, 8, "09:00", "09:00", 40.0, TimeUnit::PerDay, &[]);
    assert_eq!(occurrence_time_units(&o).unwrap(), 2);
}

#[test]
fn totals_apply_flat_fee_and_tax_rates() {
    // Two per-visit occurrences: 20+5+10 and 20+5.
    let occurrences = vec![
        occurrence(6, 6, "14:00", "16:00", 20.0, TimeUnit::PerVisit, &[("Weekend Fee", 5.0), ("Premium Package", 10.0)]),
        occurrence(7, 7, "14:00", "16:00", 20.0, TimeUnit::PerVisit, &[("Weekend Fee", 5.0)]),
    ];

    let costs = summarize_costs(&occurrences).unwrap();
    assert_eq!(costs.subtotal, 60.0);
    assert_eq!(costs.client_fee, 6.0);
    assert_eq!(costs.taxes, 5.4);
    assert_eq!(costs.total_client_cost, 71.4);
    assert_eq!(costs.professional_payout, 54.0);
}

#[test]
fn empty_occurrence_list_totals_zero() {
    let costs = summarize_costs(&[]).unwrap();
    assert_eq!(costs.subtotal, 0.0);
    assert_eq!(costs.total_client_cost, 0.0);
}

#[test]
fn malformed_clock_values_are_rejected() {
    let o = occurrence(6, 6, "9am", "12:00", 25.0, TimeUnit::OneHour, &[]);
    assert!(calculate_occurrence_cost(&o).is_err());
}
