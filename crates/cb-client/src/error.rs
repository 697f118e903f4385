use crate::StoreError;

use cb_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by the API client, the auth layer and the resource services
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session refresh failed: {message} {location}")]
    RefreshFailed {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Server error ({status}): {message} {location}")]
    Server {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("API error ({status}): {message} (code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Invalid URL '{url}': {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {source} {location}")]
    Validation {
        location: ErrorLocation,
        #[source]
        source: CoreError,
    },

    #[error("Token store error: {source} {location}")]
    Store {
        location: ErrorLocation,
        #[source]
        source: StoreError,
    },
}

impl ClientError {
    #[track_caller]
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        Self::InvalidCredentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn refresh_failed(message: impl Into<String>) -> Self {
        Self::RefreshFailed {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api(status: u16, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Decode failure without an underlying serde error (envelope mismatch)
    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source: None,
        }
    }

    #[track_caller]
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status carried by the error, if it came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::Server { status, .. } | Self::Api { status, .. } => Some(*status),
            Self::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The session is gone and the user has to sign in again
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::RefreshFailed { .. } | Self::Unauthorized { .. })
    }

    /// Text fit to show an end user. Never includes tokens or locations.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidCredentials { .. } => String::from("Invalid email or password."),
            Self::Unauthorized { .. } => {
                String::from("You are not signed in or your session is no longer valid.")
            }
            Self::RefreshFailed { .. } => {
                String::from("Your session has expired. Please sign in again.")
            }
            Self::Http { source, .. } if source.is_timeout() => {
                String::from("The server took too long to respond. Please try again.")
            }
            Self::Http { .. } => {
                String::from("Unable to reach the server. Check your connection and try again.")
            }
            Self::Server { .. } => {
                String::from("The server encountered an error. Please try again later.")
            }
            Self::Api { message, .. } => message.clone(),
            Self::Json { .. } => String::from("The server sent a response that could not be read."),
            Self::InvalidUrl { url, .. } => format!("'{url}' is not a valid server address."),
            Self::Validation { source, .. } => match source {
                CoreError::Validation { field, message, .. } => format!("{field}: {message}"),
                other => other.to_string(),
            },
            Self::Store { source, .. } => source.recovery_hint().to_string(),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: Some(err),
        }
    }
}

impl From<CoreError> for ClientError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        ClientError::Validation {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

impl From<StoreError> for ClientError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        ClientError::Store {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
