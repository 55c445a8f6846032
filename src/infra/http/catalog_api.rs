use async_trait::async_trait;
use reqwest::Method;

use crate::domain::models::service::Service;
use crate::domain::ports::ServiceCatalogApi;
use crate::error::ClientError;
use crate::infra::http::api_client::ApiClient;

pub struct HttpServiceCatalogApi {
    client: ApiClient,
}

impl HttpServiceCatalogApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ServiceCatalogApi for HttpServiceCatalogApi {
    async fn list(&self) -> Result<Vec<Service>, ClientError> {
        self.client.get_json("/api/services/v1/").await
    }

    async fn create(&self, service: &Service) -> Result<Service, ClientError> {
        self.client
            .send_json(Method::POST, "/api/services/v1/", service)
            .await
    }

    async fn update(&self, position: usize, service: &Service) -> Result<Service, ClientError> {
        self.client
            .send_json(Method::PATCH, &format!("/api/services/v1/{position}/"), service)
            .await
    }

    async fn delete(&self, position: usize) -> Result<(), ClientError> {
        self.client.delete(&format!("/api/services/v1/{position}/")).await
    }
}
