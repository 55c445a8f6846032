use serde::{Deserialize, Serialize};

pub const GENERAL_CATEGORIES: [&str; 5] = [
    "Farm Animals",
    "Domestic",
    "Exotic",
    "Aquatic",
    "Invertibrates",
];

pub const SERVICE_TYPE_SUGGESTIONS: [&str; 10] = [
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

pub const ANIMAL_TYPE_SUGGESTIONS: [&str; 8] = [
    "Dog", "Cat", "Cow", "Calf", "Lizard", "Bird", "Rabbit", "Fish",
];

/// A named extra charge row on the service form. All three fields are
/// required once the row exists.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct NamedRate {
    pub label: String,
    pub value: String,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRates {
    #[serde(rename = "base_rate")]
    pub base_rate: String,
    #[serde(default)]
    pub additional_animal_rate: String,
    #[serde(default)]
    pub holiday_rate: String,
    #[serde(default)]
    pub additional_rates: Vec<NamedRate>,
}

/// A service offering as held by the catalog form. Values stay
/// string-typed to match the wire and form shape.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub service_name: String,
    #[serde(default)]
    pub service_description: String,
    pub animal_types: String,
    #[serde(default)]
    pub length_of_service: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub rates: ServiceRates,
}
