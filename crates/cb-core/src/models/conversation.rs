//! Conversations between end users and a bot, as browsed from the tenant
//! dashboard.

use crate::{CoreError, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub bot_id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
    pub is_active: bool,
    #[serde(default, alias = "messages_count")]
    pub message_count: u64,
    #[serde(default)]
    pub last_message: Option<String>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    /// `user`, `assistant` or `system`
    pub role: String,
    pub content: String,
    #[serde(default)]
    pub citations: Option<Vec<Value>>,
    #[serde(default)]
    pub token_usage: Option<Value>,
    pub sequence_number: u32,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StartConversationResponse {
    pub conversation_id: String,
    pub message: Message,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageRequest<'a> {
    pub message: &'a str,
}

impl MessageRequest<'_> {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.message.trim().is_empty() {
            return Err(CoreError::validation("message", "cannot be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleUpdate<'a> {
    pub title: &'a str,
}
