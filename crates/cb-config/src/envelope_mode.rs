use crate::ConfigError;

use std::str::FromStr;

use serde::Deserialize;

/// How successful response bodies wrap their payload.
///
/// Backend versions disagree: some return the payload directly, some wrap it
/// as `{ "data": ... }`. The client is told which one to expect and treats
/// the other shape as a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EnvelopeMode {
    /// Payload is the whole body
    #[default]
    Bare,
    /// Payload is the body's `data` field
    Data,
}

impl EnvelopeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bare => "bare",
            Self::Data => "data",
        }
    }
}

impl FromStr for EnvelopeMode {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bare" => Ok(Self::Bare),
            "data" => Ok(Self::Data),
            _ => Err(ConfigError::api(format!(
                "api.envelope must be 'bare' or 'data', got '{s}'"
            ))),
        }
    }
}
