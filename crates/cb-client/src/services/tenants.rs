use crate::{ApiClient, ApiPath, ClientResult};

use cb_core::{NewTenant, Tenant, TenantListQuery, TenantPage, TenantUpdate, TenantUsageStats};

use std::sync::Arc;

use serde_json::Value;

const TENANTS_PATH: &str = "/admin/tenants";

/// Tenant management for the admin dashboard
pub struct TenantService {
    api: Arc<ApiClient>,
}

impl TenantService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(&self, query: &TenantListQuery) -> ClientResult<TenantPage> {
        query.validate()?;

        let params = [
            ("page", Some(query.page.to_string())),
            ("per_page", Some(query.per_page.to_string())),
            ("search", query.search.clone()),
            ("is_active", query.is_active.map(|v| v.to_string())),
            ("plan", query.plan.clone()),
        ];
        self.api
            .get_with_query(format!("{TENANTS_PATH}/"), &params)
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Tenant> {
        self.api.get(tenant_path(id)).await
    }

    pub async fn create(&self, tenant: &NewTenant) -> ClientResult<Tenant> {
        tenant.validate()?;
        self.api.post(format!("{TENANTS_PATH}/"), tenant).await
    }

    pub async fn update(&self, id: &str, update: &TenantUpdate) -> ClientResult<Tenant> {
        update.validate()?;
        self.api.put(tenant_path(id), update).await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.api.delete(tenant_path(id)).await
    }

    /// Tenant with its bots, providers and recent activity
    pub async fn full_details(&self, id: &str) -> ClientResult<Value> {
        self.api.get(tenant_path(id).segment("full")).await
    }

    pub async fn usage_stats(&self, id: &str) -> ClientResult<TenantUsageStats> {
        self.api.get(tenant_path(id).segment("stats")).await
    }
}

fn tenant_path(id: &str) -> ApiPath {
    ApiPath::new(TENANTS_PATH).segment(id)
}
