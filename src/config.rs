use std::env;

#[derive(Clone)]
pub struct Config {
    pub api_base_url: String,
    pub prototype_mode: bool,
    pub device_store_path: String,
    pub request_timeout_secs: u64,
    pub nominatim_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string()),
            prototype_mode: env::var("PROTOTYPE_MODE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(true),
            device_store_path: env::var("DEVICE_STORE_PATH").unwrap_or_else(|_| "./device_store.db".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            nominatim_url: env::var("NOMINATIM_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),
        }
    }
}
