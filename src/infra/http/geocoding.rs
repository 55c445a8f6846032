use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::Config;
use crate::domain::models::geo::GeoMatch;
use crate::domain::ports::Geocoder;
use crate::error::ClientError;
use crate::infra::http::api_client::check;

const USER_AGENT: &str = concat!("zenexotics-client/", env!("CARGO_PKG_VERSION"));

/// Free-text location search against a public Nominatim instance.
/// The instance's usage policy requires an identifying User-Agent.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.nominatim_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn search(&self, query: &str) -> Result<Vec<GeoMatch>, ClientError> {
        let res = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("format", "json"),
                ("q", query),
                ("countrycodes", "us"),
                ("limit", "5"),
            ])
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }
}
