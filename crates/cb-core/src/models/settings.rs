use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Platform-wide settings edited from the admin dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSettings {
    pub ai_provider_default: String,
    #[serde(default)]
    pub max_tenants_per_plan: BTreeMap<String, u32>,
    #[serde(default)]
    pub rate_limits: BTreeMap<String, u32>,
    pub maintenance_mode: bool,
    pub registration_enabled: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SystemSettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_provider_default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tenants_per_plan: Option<BTreeMap<String, u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limits: Option<BTreeMap<String, u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_enabled: Option<bool>,
}
