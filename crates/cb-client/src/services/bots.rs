use crate::{ApiClient, ApiPath, ClientResult};

use cb_core::{Bot, BotUpdate, NewBot};

use std::sync::Arc;

use serde_json::Value;

const BOTS_PATH: &str = "/v1/tenant/bots";

pub struct BotService {
    api: Arc<ApiClient>,
}

impl BotService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    // =========================================================================
    // Bots
    // =========================================================================

    pub async fn list(&self, is_active: Option<bool>) -> ClientResult<Vec<Bot>> {
        let params = [("is_active", is_active.map(|v| v.to_string()))];
        self.api
            .get_with_query(format!("{BOTS_PATH}/"), &params)
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Bot> {
        self.api.get(bot_path(id)).await
    }

    pub async fn create(&self, bot: &NewBot) -> ClientResult<Bot> {
        bot.validate()?;
        self.api.post(format!("{BOTS_PATH}/"), bot).await
    }

    pub async fn update(&self, id: &str, update: &BotUpdate) -> ClientResult<Bot> {
        update.validate()?;
        self.api.put(bot_path(id), update).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.api.delete(bot_path(id)).await
    }

    /// Bot counts and activity across the tenant
    pub async fn statistics(&self) -> ClientResult<Value> {
        self.api
            .get(format!("{BOTS_PATH}/statistics/overview"))
            .await
    }

    // =========================================================================
    // Dataset Assignment
    // =========================================================================

    pub async fn datasets(&self, bot_id: &str) -> ClientResult<Vec<Value>> {
        self.api.get(bot_path(bot_id).segment("datasets")).await
    }

    pub async fn attach_dataset(&self, bot_id: &str, dataset_id: &str) -> ClientResult<Value> {
        self.api
            .post_empty(assignment_path(bot_id, dataset_id))
            .await
    }

    pub async fn detach_dataset(&self, bot_id: &str, dataset_id: &str) -> ClientResult<()> {
        self.api.delete(assignment_path(bot_id, dataset_id)).await
    }
}

fn bot_path(id: &str) -> ApiPath {
    ApiPath::new(BOTS_PATH).segment(id)
}

fn assignment_path(bot_id: &str, dataset_id: &str) -> ApiPath {
    bot_path(bot_id).segment("datasets").segment(dataset_id)
}
