use chrono::{NaiveDateTime, NaiveTime};

use crate::domain::models::booking::{Booking, BookingCosts, Occurrence, TimeUnit};
use crate::error::ClientError;

/// Flat percentage added on top of the subtotal for the client.
pub const CLIENT_FEE_RATE: f64 = 0.10;
/// Flat tax percentage applied to the subtotal.
pub const TAX_RATE: f64 = 0.09;

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Parses an "HH:MM" clock value. "24:00" marks the end of the day and
/// comes back as the extra minutes past midnight.
fn parse_clock(value: &str) -> Result<i64, ClientError> {
    if value == "24:00" {
        return Ok(24 * 60);
    }
    let time = NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| ClientError::Validation(format!("Invalid time format (HH:MM): {value}")))?;
    Ok(time.signed_duration_since(NaiveTime::MIN).num_minutes())
}

fn occurrence_bounds(occurrence: &Occurrence) -> Result<(NaiveDateTime, NaiveDateTime), ClientError> {
    let start_minutes = parse_clock(&occurrence.start_time)?;
    let end_minutes = parse_clock(&occurrence.end_time)?;

    let start = occurrence
        .start_date
        .and_time(NaiveTime::MIN)
        .checked_add_signed(chrono::Duration::minutes(start_minutes))
        .ok_or_else(|| ClientError::Validation("Occurrence start out of range".to_string()))?;
    let end = occurrence
        .end_date
        .and_time(NaiveTime::MIN)
        .checked_add_signed(chrono::Duration::minutes(end_minutes))
        .ok_or_else(|| ClientError::Validation("Occurrence end out of range".to_string()))?;

    Ok((start, end))
}

/// Number of billable units covered by the span. Flat units always
/// count as one; duration-based units round the elapsed time up and
/// never bill less than a single unit.
pub fn calculate_time_units(start: NaiveDateTime, end: NaiveDateTime, unit: TimeUnit) -> i64 {
    let Some(unit_minutes) = unit.minutes() else {
        return 1;
    };

    let elapsed_ms = end.signed_duration_since(start).num_milliseconds();
    let unit_ms = unit_minutes * 60 * 1000;
    let units = (elapsed_ms as f64 / unit_ms as f64).ceil() as i64;
    units.max(1)
}

pub fn occurrence_time_units(occurrence: &Occurrence) -> Result<i64, ClientError> {
    let (start, end) = occurrence_bounds(occurrence)?;
    Ok(calculate_time_units(start, end, occurrence.rates.time_unit))
}

/// Base rate times billable units, plus the flat additional amounts.
pub fn calculate_occurrence_cost(occurrence: &Occurrence) -> Result<f64, ClientError> {
    let units = occurrence_time_units(occurrence)?;
    let extras: f64 = occurrence.rates.additional_rates.iter().map(|r| r.amount).sum();
    Ok(round_cents(occurrence.rates.base_rate * units as f64 + extras))
}

/// Recomputes the derived totals from scratch. Costs are never stored
/// authoritatively; every mutation of the occurrence list goes back
/// through here.
pub fn summarize_costs(occurrences: &[Occurrence]) -> Result<BookingCosts, ClientError> {
    let mut subtotal = 0.0;
    for occurrence in occurrences {
        subtotal += calculate_occurrence_cost(occurrence)?;
    }
    subtotal = round_cents(subtotal);

    let client_fee = round_cents(subtotal * CLIENT_FEE_RATE);
    let taxes = round_cents(subtotal * TAX_RATE);

    Ok(BookingCosts {
        subtotal,
        client_fee,
        taxes,
        total_client_cost: round_cents(subtotal + client_fee + taxes),
        professional_payout: round_cents(subtotal - subtotal * CLIENT_FEE_RATE),
    })
}

/// Convenience over a whole booking.
pub fn recompute_booking_costs(booking: &mut Booking) -> Result<(), ClientError> {
    booking.costs = summarize_costs(&booking.occurrences)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::booking::{AdditionalRate, OccurrenceRates};
    use chrono::NaiveDate;

    fn occurrence(start_time: &str, end_time: &str, unit: TimeUnit, base: f64, extras: &[f64]) -> Occurrence {
        Occurrence {
            id: "occ1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 12, 6).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 6).unwrap(),
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            rates: OccurrenceRates {
                base_rate: base,
                additional_rates: extras
                    .iter()
                    .enumerate()
                    .map(|(i, amount)| AdditionalRate {
                        name: format!("Extra {i}"),
                        amount: *amount,
                    })
                    .collect(),
                time_unit: unit,
            },
        }
    }

    #[test]
    fn flat_units_always_bill_one() {
        let per_visit = occurrence("08:00", "20:00", TimeUnit::PerVisit, 30.0, &[]);
        assert_eq!(occurrence_time_units(&per_visit).unwrap(), 1);

        let mut overnight = occurrence("20:00", "08:00", TimeUnit::Overnight, 50.0, &[]);
        overnight.end_date = NaiveDate::from_ymd_opt(2024, 12, 7).unwrap();
        assert_eq!(occurrence_time_units(&overnight).unwrap(), 1);
    }

    #[test]
    fn partial_units_round_up() {
        let o = occurrence("14:00", "15:10", TimeUnit::OneHour, 20.0, &[]);
        assert_eq!(occurrence_time_units(&o).unwrap(), 2);

        let o = occurrence("14:00", "14:20", TimeUnit::FifteenMin, 5.0, &[]);
        assert_eq!(occurrence_time_units(&o).unwrap(), 2);
    }

    #[test]
    fn zero_span_still_bills_a_unit() {
        let o = occurrence("14:00", "14:00", TimeUnit::OneHour, 20.0, &[]);
        assert_eq!(occurrence_time_units(&o).unwrap(), 1);
    }

    #[test]
    fn end_of_day_clock_parses() {
        let o = occurrence("00:00", "24:00", TimeUnit::TwentyFourHour, 100.0, &[]);
        assert_eq!(occurrence_time_units(&o).unwrap(), 1);
    }
}
