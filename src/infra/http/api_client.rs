use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::config::Config;
use crate::domain::services::session_manager::SessionManager;
use crate::error::ClientError;

/// Maps a non-2xx response to a `ClientError`, preferring the server's
/// own `error`/`detail` message over the raw body.
pub(crate) async fn into_api_error(res: reqwest::Response) -> ClientError {
    let status = res.status().as_u16();
    let text = res.text().await.unwrap_or_default();

    if status == 401 {
        return ClientError::Unauthorized;
    }

    let message = serde_json::from_str::<serde_json::Value>(&text)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("detail"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or(text);

    ClientError::Api { status, message }
}

pub(crate) async fn check(res: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if res.status().is_success() {
        Ok(res)
    } else {
        Err(into_api_error(res).await)
    }
}

/// Shared bearer-authenticated HTTP client. A 401 triggers one
/// refresh-token exchange and one retry; a failed refresh has already
/// signed the session out by the time the error surfaces.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionManager>,
}

impl ApiClient {
    pub fn new(config: &Config, session: Arc<SessionManager>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send_authorized(
        &self,
        build: impl Fn(&reqwest::Client) -> reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let token = self
            .session
            .access_token()
            .await
            .ok_or(ClientError::Unauthorized)?;

        let res = build(&self.http).bearer_auth(&token).send().await?;
        if res.status() == StatusCode::UNAUTHORIZED {
            warn!("request rejected with 401, attempting token refresh");
            let fresh = self.session.refresh().await?;
            let retry = build(&self.http).bearer_auth(&fresh).send().await?;
            return check(retry).await;
        }
        check(res).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        let res = self.send_authorized(|c| c.get(&url)).await?;
        Ok(res.json().await?)
    }

    pub async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let res = self
            .send_authorized(|c| c.request(method.clone(), &url).json(body))
            .await?;
        Ok(res.json().await?)
    }

    pub async fn send_json_unit<B>(&self, method: Method, path: &str, body: &B) -> Result<(), ClientError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        self.send_authorized(|c| c.request(method.clone(), &url).json(body))
            .await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ClientError> {
        let url = self.url(path);
        self.send_authorized(|c| c.delete(&url)).await?;
        Ok(())
    }
}
