use serde::{Deserialize, Serialize};

/// One geocoding hit for a free-text location search.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeoMatch {
    pub display_name: String,
    pub lat: String,
    pub lon: String,
}
