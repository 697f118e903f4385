//! AI provider credentials. Tenants hold their own keys for providers the
//! platform offers globally.

use crate::Result as CoreErrorResult;
use crate::validation::require_name;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tenant's credentials for one provider. The API key never comes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TenantAiProvider {
    pub id: String,
    pub tenant_id: String,
    pub global_ai_provider_id: String,
    pub provider_name: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub custom_settings: Value,
    pub is_active: bool,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTenantAiProvider {
    pub global_ai_provider_id: String,
    pub provider_name: String,
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub is_active: bool,
}

impl NewTenantAiProvider {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require_name("global_ai_provider_id", &self.global_ai_provider_id)?;
        require_name("provider_name", &self.provider_name)?;
        require_name("api_key", &self.api_key)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TenantAiProviderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// A provider configured platform-wide by an admin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalAiProvider {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub provider_type: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub config: Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewGlobalAiProvider {
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: String,
    pub config: Value,
    pub is_active: bool,
    pub is_default: bool,
}

impl NewGlobalAiProvider {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require_name("name", &self.name)?;
        require_name("type", &self.provider_type)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GlobalAiProviderUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
