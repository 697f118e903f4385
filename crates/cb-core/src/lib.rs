pub mod dashboard_kind;
pub mod error;
pub mod models;
pub mod timestamp;
pub mod validation;

#[cfg(test)]
mod tests;

pub use dashboard_kind::DashboardKind;
pub use error::{CoreError, Result};
pub use models::ai_provider::{
    GlobalAiProvider, GlobalAiProviderUpdate, NewGlobalAiProvider, NewTenantAiProvider,
    TenantAiProvider, TenantAiProviderUpdate,
};
pub use models::bot::{Bot, BotUpdate, NewBot};
pub use models::conversation::{
    Conversation, Message, MessageRequest, StartConversationResponse, TitleUpdate,
};
pub use models::dataset::{Dataset, DatasetUpdate, NewDataset};
pub use models::document::{Document, DocumentChunk, DocumentUpdate, NewDocument};
pub use models::document_status::DocumentStatus;
pub use models::identity::Identity;
pub use models::page::Page;
pub use models::session::{
    AuthSession, LoginRequest, LoginResponse, RefreshRequest, RefreshResponse,
};
pub use models::settings::{SystemSettings, SystemSettingsUpdate};
pub use models::stats::{AdminDashboardStats, SystemMetrics, TenantDashboardStats};
pub use models::tenant::{
    NewTenant, Tenant, TenantListQuery, TenantPage, TenantUpdate, TenantUsageStats,
};
