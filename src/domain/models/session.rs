use serde::{Deserialize, Serialize};

use crate::domain::models::user::UserRole;

/// The access/refresh pair handed out by the token endpoint.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionTokens {
    #[serde(rename = "access")]
    pub access: String,
    #[serde(rename = "refresh")]
    pub refresh: String,
}

/// What the rest of the application sees of the signed-in state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub signed_in: bool,
    pub role: Option<UserRole>,
    pub approved_professional: bool,
}

impl SessionSnapshot {
    pub fn signed_out() -> Self {
        Self {
            signed_in: false,
            role: None,
            approved_professional: false,
        }
    }
}
