use async_trait::async_trait;
use reqwest::Method;

use crate::domain::models::availability::{AvailabilityChange, AvailabilityData, DefaultSettings};
use crate::domain::ports::AvailabilityApi;
use crate::error::ClientError;
use crate::infra::http::api_client::ApiClient;

pub struct HttpAvailabilityApi {
    client: ApiClient,
}

impl HttpAvailabilityApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AvailabilityApi for HttpAvailabilityApi {
    async fn fetch(&self) -> Result<AvailabilityData, ClientError> {
        self.client.get_json("/api/availability/v1/").await
    }

    async fn update(&self, change: &AvailabilityChange) -> Result<(), ClientError> {
        self.client
            .send_json_unit(Method::PATCH, "/api/availability/v1/", change)
            .await
    }

    async fn update_defaults(&self, settings: &DefaultSettings) -> Result<(), ClientError> {
        self.client
            .send_json_unit(Method::PATCH, "/api/availability/v1/defaults/", settings)
            .await
    }
}
