//! Analytics payloads behind the two dashboard landing pages.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminDashboardStats {
    pub total_tenants: u64,
    pub active_tenants: u64,
    pub total_users: u64,
    pub total_chats_today: u64,
    pub total_messages_today: u64,
    pub system_health: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub total_tenants: u64,
    pub active_tenants: u64,
    pub total_bots: u64,
    pub total_conversations: u64,
    pub total_messages: u64,
    #[serde(default)]
    pub ai_provider_default: Option<String>,
    pub uptime: String,
    pub database_status: String,
}

/// The tenant backend reports these in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDashboardStats {
    pub total_bots: u64,
    pub total_documents: u64,
    pub total_conversations: u64,
    pub total_api_keys: u64,
    pub active_conversations: u64,
    pub documents_processed: u64,
}
