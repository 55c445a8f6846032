use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookingStatus {
    #[serde(rename = "Pending Initial Professional Changes")]
    PendingInitialProfessionalChanges,
    #[serde(rename = "Pending Professional Changes")]
    PendingProfessionalChanges,
    #[serde(rename = "Pending Client Approval")]
    PendingClientApproval,
    #[serde(rename = "Confirmed Pending Professional Changes")]
    ConfirmedPendingProfessionalChanges,
    #[serde(rename = "Confirmed")]
    Confirmed,
    #[serde(rename = "Denied")]
    Denied,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::PendingInitialProfessionalChanges => "Pending Initial Professional Changes",
            BookingStatus::PendingProfessionalChanges => "Pending Professional Changes",
            BookingStatus::PendingClientApproval => "Pending Client Approval",
            BookingStatus::ConfirmedPendingProfessionalChanges => "Confirmed Pending Professional Changes",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Denied => "Denied",
            BookingStatus::Cancelled => "Cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Denied | BookingStatus::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billing granularity for an occurrence's base rate.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    #[serde(rename = "15 min")]
    FifteenMin,
    #[serde(rename = "30 min")]
    ThirtyMin,
    #[serde(rename = "45 min")]
    FortyFiveMin,
    #[serde(rename = "1 hr")]
    OneHour,
    #[serde(rename = "2 hr")]
    TwoHour,
    #[serde(rename = "4 hr")]
    FourHour,
    #[serde(rename = "8 hr")]
    EightHour,
    #[serde(rename = "24 hr")]
    TwentyFourHour,
    #[serde(rename = "overnight")]
    Overnight,
    #[serde(rename = "per day")]
    PerDay,
    #[serde(rename = "per visit")]
    PerVisit,
}

impl TimeUnit {
    /// Unit length in minutes. Flat units (per visit, overnight) have none.
    pub fn minutes(&self) -> Option<i64> {
        match self {
            TimeUnit::FifteenMin => Some(15),
            TimeUnit::ThirtyMin => Some(30),
            TimeUnit::FortyFiveMin => Some(45),
            TimeUnit::OneHour => Some(60),
            TimeUnit::TwoHour => Some(120),
            TimeUnit::FourHour => Some(240),
            TimeUnit::EightHour => Some(480),
            TimeUnit::TwentyFourHour => Some(1440),
            TimeUnit::PerDay => Some(1440),
            TimeUnit::Overnight | TimeUnit::PerVisit => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdditionalRate {
    pub name: String,
    pub amount: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceRates {
    pub base_rate: f64,
    #[serde(default)]
    pub additional_rates: Vec<AdditionalRate>,
    pub time_unit: TimeUnit,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Occurrence {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub rates: OccurrenceRates,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingCosts {
    pub subtotal: f64,
    pub client_fee: f64,
    pub taxes: f64,
    pub total_client_cost: f64,
    pub professional_payout: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    #[serde(default)]
    pub breed: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub professional_id: Option<String>,
    pub client_name: String,
    pub professional_name: String,
    pub service_type: String,
    pub animal_type: String,
    #[serde(default)]
    pub pets: Vec<Pet>,
    #[serde(default)]
    pub occurrences: Vec<Occurrence>,
    #[serde(default)]
    pub costs: BookingCosts,
    #[serde(default)]
    pub status_reason: Option<String>,
    #[serde(rename = "created_at")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updated_at")]
    pub updated_at: DateTime<Utc>,
}

pub struct NewDraftParams {
    pub client_id: String,
    pub professional_id: String,
    pub client_name: Option<String>,
    pub professional_name: Option<String>,
}

impl Booking {
    /// A blank draft the professional fills in before sending for approval.
    pub fn new_draft(params: NewDraftParams) -> Self {
        let id = rand::thread_rng().gen_range(0..10_000).to_string();
        let now = Utc::now();

        Self {
            id,
            status: BookingStatus::PendingInitialProfessionalChanges,
            client_id: Some(params.client_id),
            professional_id: Some(params.professional_id),
            client_name: params.client_name.unwrap_or_else(|| "TBD".to_string()),
            professional_name: params.professional_name.unwrap_or_else(|| "TBD".to_string()),
            service_type: "TBD".to_string(),
            animal_type: "TBD".to_string(),
            pets: Vec::new(),
            occurrences: Vec::new(),
            costs: BookingCosts::default(),
            status_reason: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The list-screen projection of a booking. One of the two names is
/// present depending on which side of the booking the viewer is on.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    pub id: String,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub professional_name: Option<String>,
    pub status: BookingStatus,
    pub date: NaiveDate,
    pub time: String,
}
