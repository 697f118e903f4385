use crate::{ApiClient, ApiPath, ClientResult};

use cb_core::{
    GlobalAiProvider, GlobalAiProviderUpdate, NewGlobalAiProvider, SystemSettings,
    SystemSettingsUpdate,
};

use std::sync::Arc;

const SYSTEM_PATH: &str = "/admin/settings/system";
const PROVIDERS_PATH: &str = "/admin/settings/ai-providers";

/// Platform settings and the global AI provider catalogue
pub struct SettingsService {
    api: Arc<ApiClient>,
}

impl SettingsService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    // =========================================================================
    // System Settings
    // =========================================================================

    pub async fn system(&self) -> ClientResult<SystemSettings> {
        self.api.get(SYSTEM_PATH).await
    }

    pub async fn update_system(
        &self,
        update: &SystemSettingsUpdate,
    ) -> ClientResult<SystemSettings> {
        self.api.put(SYSTEM_PATH, update).await
    }

    // =========================================================================
    // Global AI Providers
    // =========================================================================

    pub async fn providers(&self) -> ClientResult<Vec<GlobalAiProvider>> {
        self.api.get(PROVIDERS_PATH).await
    }

    pub async fn create_provider(
        &self,
        provider: &NewGlobalAiProvider,
    ) -> ClientResult<GlobalAiProvider> {
        provider.validate()?;
        self.api.post(PROVIDERS_PATH, provider).await
    }

    pub async fn update_provider(
        &self,
        id: &str,
        update: &GlobalAiProviderUpdate,
    ) -> ClientResult<GlobalAiProvider> {
        self.api
            .put(ApiPath::new(PROVIDERS_PATH).segment(id), update)
            .await
    }

    pub async fn delete_provider(&self, id: &str) -> ClientResult<()> {
        self.api
            .delete(ApiPath::new(PROVIDERS_PATH).segment(id))
            .await
    }
}
