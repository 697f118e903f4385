use crate::{ApiClient, ClientResult};

use cb_core::TenantDashboardStats;

use std::sync::Arc;

pub struct TenantDashboardService {
    api: Arc<ApiClient>,
}

impl TenantDashboardService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn stats(&self) -> ClientResult<TenantDashboardStats> {
        self.api.get("/v1/tenant/dashboard/stats").await
    }
}
