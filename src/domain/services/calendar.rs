use chrono::NaiveDate;
use std::collections::BTreeMap;
use tracing::debug;

use crate::domain::models::availability::{
    covers_all_service_types, AvailabilityChange, AvailabilityData, AvailabilityRecord, DayStatus,
    UnavailableTime,
};

const PERSONAL_TIME: &str = " Personal Time";

/// Inclusive ascending list of days between two dates. Empty when the
/// end precedes the start.
pub fn date_range_inclusive(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut current = start;
    while current <= end {
        out.push(current);
        current = current.succ_opt().expect("date range overflow");
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    SingleDay,
    MultiDay,
}

/// Outcome of a calendar tap. `Completed` carries the dates the edit
/// modal should open with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Anchored(NaiveDate),
    Completed(Vec<NaiveDate>),
}

/// Two-tap range selection: the first tap anchors, the second closes
/// the range. A tap after a completed range starts over.
#[derive(Debug)]
pub struct DateRangeSelection {
    mode: SelectionMode,
    anchor: Option<NaiveDate>,
    completed: bool,
}

impl DateRangeSelection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            anchor: None,
            completed: false,
        }
    }

    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        self.reset();
    }

    pub fn reset(&mut self) {
        self.anchor = None;
        self.completed = false;
    }

    pub fn press(&mut self, date: NaiveDate) -> SelectionEvent {
        if self.mode == SelectionMode::SingleDay {
            self.reset();
            return SelectionEvent::Completed(vec![date]);
        }

        match self.anchor.take() {
            Some(anchor) if !self.completed => {
                self.completed = true;
                SelectionEvent::Completed(date_range_inclusive(anchor, date))
            }
            _ => {
                self.anchor = Some(date);
                self.completed = false;
                SelectionEvent::Anchored(date)
            }
        }
    }
}

/// In-memory availability state for the professional's calendar: the
/// per-date records plus the derived cell styling.
#[derive(Debug, Default)]
pub struct AvailabilityCalendar {
    records: BTreeMap<NaiveDate, AvailabilityRecord>,
    marks: BTreeMap<NaiveDate, DayStatus>,
}

impl AvailabilityCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, date: NaiveDate) -> Option<&AvailabilityRecord> {
        self.records.get(&date)
    }

    pub fn day_status(&self, date: NaiveDate) -> DayStatus {
        self.marks.get(&date).copied().unwrap_or(DayStatus::Available)
    }

    pub fn marked_days(&self) -> &BTreeMap<NaiveDate, DayStatus> {
        &self.marks
    }

    /// Builds the combined record map from the initial fetch: explicit
    /// availability, blocked windows, and confirmed bookings folded
    /// into one structure.
    pub fn ingest(&mut self, data: &AvailabilityData) {
        self.records.clear();
        self.marks.clear();

        for date in data.available_dates.keys() {
            self.records.insert(
                *date,
                AvailabilityRecord {
                    is_available: true,
                    unavailable_times: Vec::new(),
                },
            );
            self.marks.insert(*date, DayStatus::Available);
        }

        for (date, window) in &data.unavailable_dates {
            let entry = UnavailableTime {
                start_time: window.start_time.clone(),
                end_time: window.end_time.clone(),
                reason: PERSONAL_TIME.to_string(),
                client_id: None,
            };
            let full_day = entry.is_all_day();
            self.records.insert(
                *date,
                AvailabilityRecord {
                    is_available: false,
                    unavailable_times: vec![entry],
                },
            );
            self.marks.insert(
                *date,
                if full_day {
                    DayStatus::FullyUnavailable
                } else {
                    DayStatus::PartiallyUnavailable
                },
            );
        }

        for (date, slots) in &data.bookings {
            let record = self.records.entry(*date).or_insert_with(|| AvailabilityRecord {
                is_available: true,
                unavailable_times: Vec::new(),
            });
            for slot in slots {
                record.unavailable_times.push(UnavailableTime {
                    start_time: slot.start_time.clone(),
                    end_time: slot.end_time.clone(),
                    reason: format!(" Booked with {}", slot.client_name),
                    client_id: slot.client_id.clone(),
                });
            }

            let full_day = slots
                .iter()
                .any(|s| s.start_time == "00:00" && s.end_time == "24:00");
            self.marks.insert(
                *date,
                if full_day {
                    DayStatus::BookedAllDay
                } else {
                    DayStatus::Booked
                },
            );
        }
    }

    /// Applies one modal edit across its date range.
    pub fn apply_change(&mut self, change: &AvailabilityChange) {
        debug!(
            dates = change.dates.len(),
            available = change.is_available,
            "applying availability change"
        );

        // An all-day edit addresses the sentinel 00:00-24:00 window.
        let (change_start, change_end) = if change.is_all_day {
            ("00:00".to_string(), "24:00".to_string())
        } else {
            (
                change.start_time.clone().unwrap_or_default(),
                change.end_time.clone().unwrap_or_default(),
            )
        };

        for date in &change.dates {
            if change.is_available {
                let record = self.records.entry(*date).or_default();
                record
                    .unavailable_times
                    .retain(|slot| slot.start_time != change_start || slot.end_time != change_end);
                record.is_available = true;

                let status = if record.unavailable_times.is_empty() {
                    DayStatus::Available
                } else {
                    DayStatus::PartiallyUnavailable
                };
                self.marks.insert(*date, status);
            } else if change.is_all_day {
                // Fully unavailable only when every service type is
                // blocked; a subset keeps the day partially open.
                let fully = covers_all_service_types(&change.service_types);
                self.records.insert(
                    *date,
                    AvailabilityRecord {
                        is_available: !fully,
                        unavailable_times: vec![UnavailableTime::all_day(PERSONAL_TIME)],
                    },
                );
                self.marks.insert(
                    *date,
                    if fully {
                        DayStatus::FullyUnavailable
                    } else {
                        DayStatus::PartiallyUnavailable
                    },
                );
            } else {
                let record = self.records.entry(*date).or_default();
                record.is_available = true;
                record.unavailable_times.push(UnavailableTime {
                    start_time: change_start.clone(),
                    end_time: change_end.clone(),
                    reason: PERSONAL_TIME.to_string(),
                    client_id: None,
                });
                self.marks.insert(*date, DayStatus::PartiallyUnavailable);
            }
        }
    }

    pub(crate) fn set_day(&mut self, date: NaiveDate, record: AvailabilityRecord, status: DayStatus) {
        self.records.insert(date, record);
        self.marks.insert(date, status);
    }
}
