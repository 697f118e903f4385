use crate::{ApiClient, ApiPath, ClientResult};

use cb_core::{Conversation, Message, MessageRequest, StartConversationResponse, TitleUpdate};

use std::sync::Arc;

use serde_json::Value;

const TENANT_PATH: &str = "/v1/tenant";

/// Conversations with a tenant's bots
pub struct ConversationService {
    api: Arc<ApiClient>,
}

impl ConversationService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, bot_id: &str) -> ClientResult<Vec<Conversation>> {
        self.api
            .get(bot_conversations_path(bot_id))
            .await
    }

    /// Open a conversation with its first message; returns the bot's reply
    pub async fn start(
        &self,
        bot_id: &str,
        message: &str,
    ) -> ClientResult<StartConversationResponse> {
        let body = MessageRequest { message };
        body.validate()?;
        self.api
            .post(bot_conversations_path(bot_id), &body)
            .await
    }

    pub async fn messages(&self, conversation_id: &str) -> ClientResult<Vec<Message>> {
        self.api
            .get(conversation_path(conversation_id).segment("messages"))
            .await
    }

    /// Send a message; returns the bot's reply
    pub async fn send(&self, conversation_id: &str, message: &str) -> ClientResult<Message> {
        let body = MessageRequest { message };
        body.validate()?;
        self.api
            .post(conversation_path(conversation_id).segment("messages"), &body)
            .await
    }

    pub async fn delete(&self, conversation_id: &str) -> ClientResult<()> {
        self.api
            .delete(conversation_path(conversation_id))
            .await
    }

    pub async fn rename(&self, conversation_id: &str, title: &str) -> ClientResult<Value> {
        self.api
            .put(
                conversation_path(conversation_id).segment("title"),
                &TitleUpdate { title },
            )
            .await
    }

    pub async fn regenerate_title(&self, conversation_id: &str) -> ClientResult<Value> {
        self.api
            .post_empty(conversation_path(conversation_id).segment("regenerate-title"))
            .await
    }
}

fn conversation_path(id: &str) -> ApiPath {
    ApiPath::new(TENANT_PATH).segment("conversations").segment(id)
}

fn bot_conversations_path(bot_id: &str) -> ApiPath {
    ApiPath::new(TENANT_PATH)
        .segment("bots")
        .segment(bot_id)
        .segment("conversations")
}
