//! Shared fixtures for the wiremock integration tests

#![allow(dead_code)]

use cb_client::{ApiClient, MemoryTokenStore, Navigator, Route, TokenStore};
use cb_config::{ApiConfig, DashboardKind, EnvelopeMode};

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use wiremock::MockServer;

/// Navigator that remembers every route it was sent to
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &Route) {
        self.routes.lock().unwrap().push(route.clone());
    }
}

pub struct Harness {
    pub api: Arc<ApiClient>,
    pub store: Arc<MemoryTokenStore>,
    pub navigator: Arc<RecordingNavigator>,
}

impl Harness {
    pub fn new(server: &MockServer, kind: DashboardKind) -> Self {
        Self::with_envelope(server, kind, EnvelopeMode::Bare)
    }

    pub fn with_envelope(server: &MockServer, kind: DashboardKind, envelope: EnvelopeMode) -> Self {
        let config = ApiConfig {
            base_url: server.uri(),
            timeout_secs: 5,
            envelope,
            dashboard: kind,
        };
        let store = Arc::new(MemoryTokenStore::new());
        let navigator = Arc::new(RecordingNavigator::default());
        let api = ApiClient::new(&config, store.clone(), navigator.clone()).unwrap();

        Self {
            api: Arc::new(api),
            store,
            navigator,
        }
    }

    /// Seed a signed-in session
    pub fn sign_in(&self, access: &str, refresh: Option<&str>) {
        self.store.set_tokens(access, refresh).unwrap();
    }
}

pub fn admin_user() -> Value {
    json!({
        "id": "a0000000-0000-0000-0000-000000000001",
        "email": "admin@example.test",
        "name": "Platform Admin",
        "role": "super_admin",
        "is_active": true,
        "created_at": "2025-01-01T00:00:00"
    })
}

pub fn tenant_identity() -> Value {
    json!({
        "id": "t0000000-0000-0000-0000-000000000001",
        "name": "Acme",
        "slug": "acme",
        "email": "owner@acme.test",
        "plan": "pro",
        "is_active": true
    })
}

pub fn admin_stats() -> Value {
    json!({
        "total_tenants": 12,
        "active_tenants": 10,
        "total_users": 340,
        "total_chats_today": 25,
        "total_messages_today": 410,
        "system_health": "healthy"
    })
}

pub fn refresh_body(access: &str, refresh: &str) -> Value {
    json!({
        "access_token": access,
        "refresh_token": refresh,
        "token_type": "bearer",
        "user": admin_user()
    })
}
