use thiserror::Error;

use crate::domain::services::catalog::ValidationErrors;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Session expired")]
    SessionExpired,
    #[error("Resource not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Invalid form input")]
    FormValidation(ValidationErrors),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ClientError {
    /// Text suitable for a user-facing alert or inline banner.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Network(_) => "Unable to reach the server. Please try again.".to_string(),
            ClientError::Api { message, .. } => message.clone(),
            ClientError::Unauthorized => "Invalid credentials. Please try again.".to_string(),
            ClientError::SessionExpired => "Your session has expired. Please sign in again.".to_string(),
            ClientError::NotFound(msg) => msg.clone(),
            ClientError::Validation(msg) => msg.clone(),
            ClientError::FormValidation(_) => "Please fill out the highlighted fields.".to_string(),
            ClientError::Storage(_) | ClientError::Serialization(_) | ClientError::Internal(_) => {
                "An unexpected error occurred.".to_string()
            }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized)
            || matches!(self, ClientError::Api { status: 401, .. })
    }
}
