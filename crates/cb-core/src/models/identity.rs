//! Identity of the signed-in principal (an admin user or a tenant).

use crate::DashboardKind;

use serde::{Deserialize, Serialize};

/// Who is signed in. Admin logins return this under `user`, tenant logins
/// under `tenant`; the profile endpoints return it bare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: String,
}

impl Identity {
    /// Fill in the dashboard's default role when the backend sent none.
    pub fn with_default_role(mut self, kind: DashboardKind) -> Self {
        if self.role.trim().is_empty() {
            self.role = kind.default_role().to_string();
        }
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin" || self.role == "super_admin"
    }
}
