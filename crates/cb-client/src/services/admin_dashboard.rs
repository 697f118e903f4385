use crate::{ApiClient, ClientResult};

use cb_core::{AdminDashboardStats, SystemMetrics};

use std::sync::Arc;

pub struct AdminDashboardService {
    api: Arc<ApiClient>,
}

impl AdminDashboardService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn stats(&self) -> ClientResult<AdminDashboardStats> {
        self.api.get("/admin/dashboard/stats").await
    }

    pub async fn metrics(&self) -> ClientResult<SystemMetrics> {
        self.api.get("/admin/dashboard/metrics").await
    }
}
