use cb_core::DashboardKind;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] cb_config::ConfigError),

    #[error("{0}")]
    Client(#[from] cb_client::ClientError),

    #[error("Token store error: {0}")]
    Store(#[from] cb_client::StoreError),

    #[error("Not signed in")]
    NotSignedIn,

    #[error("'{command}' needs the {expected} dashboard (current: {actual})")]
    WrongDashboard {
        command: &'static str,
        expected: DashboardKind,
        actual: DashboardKind,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    /// Text for stderr; client errors get their presentable form
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(e) => e.user_message(),
            Self::Store(e) => format!("{e}\n{}", e.recovery_hint()),
            other => other.to_string(),
        }
    }

    /// Whether the fix is to sign in again
    pub fn needs_login(&self) -> bool {
        match self {
            Self::NotSignedIn => true,
            Self::Client(e) => e.is_session_expired(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
