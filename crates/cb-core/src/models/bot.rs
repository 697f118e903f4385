//! Bots: conversational agents bound to a tenant AI provider and model.

use crate::Result as CoreErrorResult;
use crate::validation::{require_name, require_positive_tokens, require_temperature};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bot {
    pub id: String,
    pub tenant_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub system_prompt: Option<String>,
    pub model: String,
    pub temperature: f64,
    #[serde(default)]
    pub max_tokens: Option<u32>,
    pub is_active: bool,
    pub tenant_ai_provider_id: String,
    #[serde(default)]
    pub ai_provider_name: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub allowed_domains: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Value>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewBot {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    pub model: String,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    pub is_active: bool,
    pub tenant_ai_provider_id: String,
    pub is_public: bool,
    pub allowed_domains: Vec<String>,
    pub dataset_ids: Vec<String>,
}

impl NewBot {
    /// A bot with the backend's defaults for everything but name and provider.
    pub fn new(name: impl Into<String>, tenant_ai_provider_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            system_prompt: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: None,
            is_active: true,
            tenant_ai_provider_id: tenant_ai_provider_id.into(),
            is_public: false,
            allowed_domains: Vec::new(),
            dataset_ids: Vec::new(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require_name("name", &self.name)?;
        require_name("model", &self.model)?;
        require_name("tenant_ai_provider_id", &self.tenant_ai_provider_id)?;
        require_temperature(self.temperature)?;
        if let Some(max_tokens) = self.max_tokens {
            require_positive_tokens(max_tokens)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct BotUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_ai_provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_ids: Option<Vec<String>>,
}

impl BotUpdate {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if let Some(ref name) = self.name {
            require_name("name", name)?;
        }
        if let Some(temperature) = self.temperature {
            require_temperature(temperature)?;
        }
        if let Some(max_tokens) = self.max_tokens {
            require_positive_tokens(max_tokens)?;
        }
        Ok(())
    }
}
