use crate::{CoreError, DocumentStatus, Result as CoreErrorResult};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_SOURCE_TYPE: &str = "text";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub dataset_id: String,
    pub title: String,
    pub source_type: String,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub metadata: Value,
    #[serde(default)]
    pub content_hash: Option<String>,
    pub status: DocumentStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "crate::timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

/// A retrieval chunk produced from a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub token_count: Option<u32>,
    pub chunk_index: u32,
    #[serde(default)]
    pub start_char: Option<u64>,
    #[serde(default)]
    pub end_char: Option<u64>,
    #[serde(default)]
    pub has_embedding: bool,
}

/// Text document created from inline content
#[derive(Debug, Clone, Serialize)]
pub struct NewDocument {
    pub title: String,
    pub source_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub tags: Vec<String>,
    pub content: String,
}

impl NewDocument {
    pub fn text(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source_type: DEFAULT_SOURCE_TYPE.to_string(),
            source_url: None,
            tags: Vec::new(),
            content: content.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        require_title(&self.title)?;
        if self.content.trim().is_empty() {
            return Err(CoreError::validation("content", "cannot be empty"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DocumentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl DocumentUpdate {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        match self.title {
            Some(ref title) => require_title(title),
            None => Ok(()),
        }
    }
}

#[track_caller]
fn require_title(title: &str) -> CoreErrorResult<()> {
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::validation(
            "title",
            format!("exceeds {MAX_TITLE_LENGTH} characters"),
        ));
    }
    if title.trim().is_empty() {
        return Err(CoreError::validation("title", "cannot be empty"));
    }
    Ok(())
}

