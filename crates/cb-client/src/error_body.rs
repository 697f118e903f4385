//! Turning non-2xx responses into [`ClientError`]s.
//!
//! Three error body shapes are understood:
//! - `{"detail": "..."}` or `{"detail": [{"msg": "..."}, ...]}`
//! - `{"error": {"code": "...", "message": "..."}}`
//! - `{"error": "...", "message": "..."}`

use crate::ClientError;

use reqwest::StatusCode;
use serde_json::Value;

/// Code and message extracted from an error body
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ErrorBody {
    pub(crate) fn parse(status: StatusCode, body: &str) -> Self {
        let fallback_code = default_code(status);
        let fallback_message = status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string();

        let Ok(json) = serde_json::from_str::<Value>(body) else {
            return Self {
                code: fallback_code,
                message: fallback_message,
            };
        };

        if let Some(message) = json.get("detail").and_then(detail_message) {
            return Self {
                code: fallback_code,
                message,
            };
        }

        match json.get("error") {
            Some(Value::Object(error)) => Self {
                code: error
                    .get("code")
                    .and_then(Value::as_str)
                    .map(String::from)
                    .unwrap_or(fallback_code),
                message: error
                    .get("message")
                    .and_then(Value::as_str)
                    .map(String::from)
                    .unwrap_or(fallback_message),
            },
            Some(Value::String(code)) => Self {
                code: code.clone(),
                message: json
                    .get("message")
                    .and_then(Value::as_str)
                    .map(String::from)
                    .unwrap_or(fallback_message),
            },
            _ => Self {
                code: fallback_code,
                message: json
                    .get("message")
                    .and_then(Value::as_str)
                    .map(String::from)
                    .unwrap_or(fallback_message),
            },
        }
    }

    #[track_caller]
    pub(crate) fn into_error(self, status: StatusCode) -> ClientError {
        match status.as_u16() {
            401 => ClientError::unauthorized(self.message),
            500.. => ClientError::server(status.as_u16(), self.message),
            other => ClientError::api(other, self.code, self.message),
        }
    }
}

fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

/// `404 Not Found` -> `NOT_FOUND`
fn default_code(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => reason.to_uppercase().replace([' ', '-'], "_"),
        None => format!("HTTP_{}", status.as_u16()),
    }
}
