use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::models::session::SessionTokens;
use crate::domain::models::user::{ProfessionalStatus, UserInfo};
use crate::domain::ports::AuthApi;
use crate::error::ClientError;
use crate::infra::http::api_client::check;

/// Token endpoints and account lookups. Sits below the session
/// manager, so every call carries its token explicitly and none of
/// them participate in the refresh-retry flow.
pub struct HttpAuthApi {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh: &'a str,
}

#[derive(Deserialize)]
struct RefreshResponse {
    access: String,
}

impl HttpAuthApi {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl AuthApi for HttpAuthApi {
    async fn obtain_token_pair(&self, email: &str, password: &str) -> Result<SessionTokens, ClientError> {
        let res = self
            .client
            .post(self.url("/api/token/"))
            .json(&TokenRequest { email, password })
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }

    async fn refresh_access(&self, refresh_token: &str) -> Result<String, ClientError> {
        let res = self
            .client
            .post(self.url("/api/token/refresh/"))
            .json(&RefreshRequest { refresh: refresh_token })
            .send()
            .await?;
        let body: RefreshResponse = check(res).await?.json().await?;
        Ok(body.access)
    }

    async fn professional_status(&self, access_token: &str) -> Result<ProfessionalStatus, ClientError> {
        let res = self
            .client
            .get(self.url("/api/professional-status/v1/"))
            .bearer_auth(access_token)
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }

    async fn user_info(&self, access_token: &str) -> Result<UserInfo, ClientError> {
        let res = self
            .client
            .get(self.url("/api/users/get-info/"))
            .bearer_auth(access_token)
            .send()
            .await?;
        Ok(check(res).await?.json().await?)
    }
}
