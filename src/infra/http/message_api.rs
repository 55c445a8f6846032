use async_trait::async_trait;
use reqwest::Method;

use crate::domain::models::message::{Conversation, Message, OutgoingMessage};
use crate::domain::models::user::ContactRequest;
use crate::domain::ports::{ContactApi, MessageApi};
use crate::error::ClientError;
use crate::infra::http::api_client::ApiClient;

pub struct HttpMessageApi {
    client: ApiClient,
}

impl HttpMessageApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MessageApi for HttpMessageApi {
    async fn conversations(&self) -> Result<Vec<Conversation>, ClientError> {
        self.client.get_json("/api/conversations/v1/").await
    }

    async fn messages(&self, conversation_id: &str) -> Result<Vec<Message>, ClientError> {
        self.client
            .get_json(&format!("/api/conversations/v1/{conversation_id}/messages/"))
            .await
    }

    async fn send(&self, message: &OutgoingMessage) -> Result<Message, ClientError> {
        self.client
            .send_json(
                Method::POST,
                &format!("/api/conversations/v1/{}/messages/", message.conversation_id),
                message,
            )
            .await
    }
}

pub struct HttpContactApi {
    client: ApiClient,
}

impl HttpContactApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactApi for HttpContactApi {
    async fn submit(&self, request: &ContactRequest) -> Result<(), ClientError> {
        self.client
            .send_json_unit(Method::POST, "/api/users/contact/", request)
            .await
    }
}
