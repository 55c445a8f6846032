use serde::{Deserialize, Serialize};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Sentinel service type that expands to every concrete offering.
pub const ALL_SERVICES: &str = "All Services";

pub const SERVICE_TYPES: [&str; 11] = [
    ALL_SERVICES,
    "Overnight Cat Sitting (Client's Home)",
    "Cat Boarding",
    "Drop-In Visits (30 min)",
    "Drop-In Visits (60 min)",
    "Dog Walking",
    "Doggy Day Care",
    "Pet Boarding",
    "Exotic Pet Care",
    "Daytime Pet Sitting",
    "Ferrier",
];

/// Expands the sentinel into the concrete list. Duplicates are dropped,
/// order of the canonical list is kept.
pub fn expand_service_types(selected: &[String]) -> Vec<String> {
    if selected.iter().any(|s| s == ALL_SERVICES) {
        return SERVICE_TYPES
            .iter()
            .filter(|s| **s != ALL_SERVICES)
            .map(|s| s.to_string())
            .collect();
    }
    let mut out = Vec::new();
    for s in selected {
        if s != ALL_SERVICES && !out.contains(s) {
            out.push(s.clone());
        }
    }
    out
}

/// True when the selection covers every concrete service type.
pub fn covers_all_service_types(selected: &[String]) -> bool {
    let expanded = expand_service_types(selected);
    SERVICE_TYPES
        .iter()
        .filter(|s| **s != ALL_SERVICES)
        .all(|s| expanded.iter().any(|e| e == s))
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnavailableTime {
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl UnavailableTime {
    pub fn all_day(reason: impl Into<String>) -> Self {
        Self {
            start_time: "00:00".to_string(),
            end_time: "24:00".to_string(),
            reason: reason.into(),
            client_id: None,
        }
    }

    pub fn is_all_day(&self) -> bool {
        self.start_time == "00:00" && self.end_time == "24:00"
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRecord {
    pub is_available: bool,
    #[serde(default)]
    pub unavailable_times: Vec<UnavailableTime>,
}

/// Calendar cell styling derived from a day's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    /// White cell, nothing blocks the day.
    Available,
    /// Olive cell, some windows are blocked.
    PartiallyUnavailable,
    /// Grey cell, the whole day is blocked for every service.
    FullyUnavailable,
    /// Yellow-brown cell, confirmed bookings occupy part of the day.
    Booked,
    /// Primary-colored cell, a booking spans the whole day.
    BookedAllDay,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    pub start_time: String,
    pub end_time: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookedSlot {
    #[serde(default)]
    pub id: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub client_name: String,
    #[serde(default)]
    pub client_id: Option<String>,
}

/// The availability screen's initial fetch payload.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityData {
    #[serde(default)]
    pub available_dates: BTreeMap<NaiveDate, TimeWindow>,
    #[serde(default)]
    pub unavailable_dates: BTreeMap<NaiveDate, TimeWindow>,
    #[serde(default)]
    pub bookings: BTreeMap<NaiveDate, Vec<BookedSlot>>,
}

/// One edit applied from the availability modal, possibly over a
/// multi-day range.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityChange {
    pub dates: Vec<NaiveDate>,
    #[serde(default)]
    pub service_types: Vec<String>,
    pub is_available: bool,
    pub is_all_day: bool,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Per-weekday availability template.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DayTemplate {
    pub is_unavailable: bool,
    pub is_all_day: bool,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Default for DayTemplate {
    fn default() -> Self {
        Self {
            is_unavailable: false,
            is_all_day: false,
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            end_date: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct DefaultSettings {
    #[serde(rename = "Monday", default)]
    pub monday: DayTemplate,
    #[serde(rename = "Tuesday", default)]
    pub tuesday: DayTemplate,
    #[serde(rename = "Wednesday", default)]
    pub wednesday: DayTemplate,
    #[serde(rename = "Thursday", default)]
    pub thursday: DayTemplate,
    #[serde(rename = "Friday", default)]
    pub friday: DayTemplate,
    #[serde(rename = "Saturday", default)]
    pub saturday: DayTemplate,
    #[serde(rename = "Sunday", default)]
    pub sunday: DayTemplate,
}
