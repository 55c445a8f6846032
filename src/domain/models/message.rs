use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Conversation {
    pub id: String,
    pub participant1_id: i64,
    pub participant2_id: i64,
    pub name: String,
    #[serde(rename = "lastMessage", default)]
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub unread: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Message {
    pub message_id: i64,
    pub conversation_id: String,
    pub sender: i64,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub booking_id: Option<String>,
    pub status: String,
    #[serde(default)]
    pub is_booking_request: bool,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// A message about to be sent, before the backend assigns identity.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutgoingMessage {
    pub conversation_id: String,
    pub content: String,
    #[serde(default)]
    pub booking_id: Option<String>,
    #[serde(default)]
    pub is_booking_request: bool,
}
