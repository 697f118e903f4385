//! Authenticated client for the chatbot platform's admin and tenant dashboards.
//!
//! [`ApiClient`] owns bearer injection and the single refresh-and-retry on a
//! 401. [`AuthService`], [`AuthContext`] and [`RouteGuard`] build the session
//! lifecycle on top of it; the resource services cover the dashboard pages.

pub(crate) mod api_client;
pub(crate) mod api_path;
pub(crate) mod auth;
pub(crate) mod error;
pub(crate) mod error_body;
pub(crate) mod navigation;
pub(crate) mod services;
pub(crate) mod token_store;

#[cfg(test)]
mod tests;

pub use api_client::ApiClient;
pub use api_path::ApiPath;
pub use auth::{
    context::{AuthContext, AuthState},
    endpoints::AuthEndpoints,
    guard::{GuardDecision, GuardState, RouteGuard},
    service::AuthService,
};
pub use error::{ClientError, Result as ClientResult};
pub use navigation::{DASHBOARD_PATH, LOGIN_PATH, Navigator, Route};
pub use services::{
    admin_dashboard::AdminDashboardService, ai_providers::AiProviderService, bots::BotService,
    conversations::ConversationService, datasets::DatasetService, documents::DocumentService,
    settings::SettingsService, tenant_dashboard::TenantDashboardService, tenants::TenantService,
};
pub use token_store::{
    TokenStore, error::StoreError, file::FileTokenStore, memory::MemoryTokenStore,
    storage_key::StorageKey,
};
