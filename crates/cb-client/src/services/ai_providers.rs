use crate::{ApiClient, ApiPath, ClientResult};

use cb_core::{NewTenantAiProvider, TenantAiProvider, TenantAiProviderUpdate};

use std::sync::Arc;

use serde_json::Value;

const PROVIDERS_PATH: &str = "/v1/tenant/ai-providers";

/// A tenant's credentials for the platform's AI providers
pub struct AiProviderService {
    api: Arc<ApiClient>,
}

impl AiProviderService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ClientResult<Vec<TenantAiProvider>> {
        self.api.get(format!("{PROVIDERS_PATH}/")).await
    }

    pub async fn get(&self, id: &str) -> ClientResult<TenantAiProvider> {
        self.api.get(provider_path(id)).await
    }

    pub async fn create(&self, provider: &NewTenantAiProvider) -> ClientResult<TenantAiProvider> {
        provider.validate()?;
        self.api.post(format!("{PROVIDERS_PATH}/"), provider).await
    }

    pub async fn update(
        &self,
        id: &str,
        update: &TenantAiProviderUpdate,
    ) -> ClientResult<TenantAiProvider> {
        self.api.put(provider_path(id), update).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.api.delete(provider_path(id)).await
    }

    /// Providers the platform offers that a tenant can add credentials for
    pub async fn available(&self) -> ClientResult<Vec<Value>> {
        self.api
            .get(format!("{PROVIDERS_PATH}/global/available"))
            .await
    }
}

fn provider_path(id: &str) -> ApiPath {
    ApiPath::new(PROVIDERS_PATH).segment(id)
}
