//! Tenants as seen by the admin dashboard.

use crate::Page;
use crate::validation::{MAX_PER_PAGE, MIN_PER_PAGE, require_name, require_password};
use crate::{CoreError, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A customer organization owning bots, datasets and conversations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub owner_email: Option<String>,
    pub plan: String,
    pub is_active: bool,
    #[serde(default)]
    pub global_rate_limit: Option<u32>,
    #[serde(default)]
    pub settings: Option<Value>,
    #[serde(default)]
    pub feature_flags: Option<Value>,
    #[serde(default, deserialize_with = "crate::timestamp::deserialize_option")]
    pub last_login_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub usage_stats: Option<TenantUsageStats>,
}

/// One page of the admin tenant listing
pub type TenantPage = Page<Tenant>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantUsageStats {
    pub total_chats: u64,
    pub total_messages: u64,
    pub total_tokens_used: u64,
    pub active_users: u64,
    pub storage_used_mb: f64,
    #[serde(default)]
    pub last_activity: Option<String>,
}

/// Filters for the tenant listing
#[derive(Debug, Clone, Serialize)]
pub struct TenantListQuery {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
}

impl Default for TenantListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 10,
            search: None,
            is_active: None,
            plan: None,
        }
    }
}

impl TenantListQuery {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.page == 0 {
            return Err(CoreError::validation("page", "must be at least 1"));
        }
        if !(MIN_PER_PAGE..=MAX_PER_PAGE).contains(&self.per_page) {
            return Err(CoreError::validation(
                "per_page",
                format!(
                    "must be {MIN_PER_PAGE}-{MAX_PER_PAGE}, got {}",
                    self.per_page
                ),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTenant {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    pub plan: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_rate_limit: Option<u32>,
}

impl NewTenant {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require_name("name", &self.name)?;
        require_name("slug", &self.slug)?;
        if let Some(ref password) = self.password {
            require_password("password", password)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TenantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_rate_limit: Option<u32>,
}

impl TenantUpdate {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(ref name) = self.name {
            require_name("name", name)?;
        }
        if let Some(ref slug) = self.slug {
            require_name("slug", slug)?;
        }
        if let Some(ref password) = self.password {
            require_password("password", password)?;
        }
        Ok(())
    }
}
