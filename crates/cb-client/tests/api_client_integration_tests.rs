//! Bearer injection and refresh-and-retry against a wiremock backend

mod common;

use crate::common::{Harness, admin_stats, refresh_body};

use cb_client::{AdminDashboardService, BotService, ClientError, Route, TokenStore};
use cb_config::{DashboardKind, EnvelopeMode};
use cb_core::NewBot;

use std::time::Duration;

use futures::future::join_all;
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

const STATS_PATH: &str = "/admin/dashboard/stats";
const REFRESH_PATH: &str = "/admin/auth/refresh";

async fn mount_expired(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Token has expired"})),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_stored_token_sent_as_bearer() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    harness.sign_in("access-1", None);

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(admin_stats()))
        .expect(1)
        .mount(&server)
        .await;

    let stats = AdminDashboardService::new(harness.api.clone())
        .stats()
        .await
        .unwrap();

    assert_eq!(stats.total_tenants, 12);
    assert_eq!(stats.system_health, "healthy");
}

#[tokio::test]
async fn test_single_401_refreshes_once_and_retries_with_new_token() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    harness.sign_in("access-1", Some("refresh-1"));

    mount_expired(&server, "access-1").await;

    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .and(body_json(json!({"refresh_token": "refresh-1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(refresh_body("access-2", "refresh-2")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .and(header("authorization", "Bearer access-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(admin_stats()))
        .expect(1)
        .mount(&server)
        .await;

    let result = AdminDashboardService::new(harness.api.clone()).stats().await;

    assert!(result.is_ok(), "{result:?}");
    assert_eq!(harness.store.access_token().as_deref(), Some("access-2"));
    assert_eq!(harness.store.refresh_token().as_deref(), Some("refresh-2"));
    assert!(harness.navigator.routes().is_empty());
}

#[tokio::test]
async fn test_second_401_after_retry_is_returned_without_second_refresh() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    harness.sign_in("access-1", Some("refresh-1"));

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Forbidden"})))
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(refresh_body("access-2", "refresh-2")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = AdminDashboardService::new(harness.api.clone()).stats().await;

    assert!(matches!(result, Err(ClientError::Unauthorized { .. })));
    assert!(harness.navigator.routes().is_empty());
}

#[tokio::test]
async fn test_concurrent_401s_share_one_refresh() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    harness.sign_in("access-1", Some("refresh-1"));

    mount_expired(&server, "access-1").await;

    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(refresh_body("access-2", "refresh-2"))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .and(header("authorization", "Bearer access-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(admin_stats()))
        .expect(3)
        .mount(&server)
        .await;

    let service = AdminDashboardService::new(harness.api.clone());
    let results = join_all((0..3).map(|_| service.stats())).await;

    for result in results {
        assert!(result.is_ok(), "{result:?}");
    }
    assert_eq!(harness.store.access_token().as_deref(), Some("access-2"));
}

#[tokio::test]
async fn test_failed_refresh_clears_store_and_redirects_to_login() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    harness.sign_in("access-1", Some("refresh-1"));
    harness
        .store
        .cache_user(&serde_json::from_value(common::admin_user()).unwrap())
        .unwrap();

    mount_expired(&server, "access-1").await;

    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Could not validate refresh token"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = AdminDashboardService::new(harness.api.clone()).stats().await;

    assert!(matches!(result, Err(ClientError::RefreshFailed { .. })));
    assert!(harness.store.access_token().is_none());
    assert!(harness.store.refresh_token().is_none());
    assert!(harness.store.cached_user().is_none());
    assert_eq!(harness.navigator.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn test_401_without_refresh_token_is_returned_unchanged() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    harness.sign_in("access-1", None);

    mount_expired(&server, "access-1").await;

    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = AdminDashboardService::new(harness.api.clone()).stats().await;

    match result {
        Err(ClientError::Unauthorized { message, .. }) => assert_eq!(message, "Token has expired"),
        other => panic!("expected Unauthorized, got {other:?}"),
    }
    assert!(harness.navigator.routes().is_empty());
}

#[tokio::test]
async fn test_proactive_refresh_uses_stored_refresh_token() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    harness.sign_in("access-1", Some("refresh-1"));

    Mock::given(method("POST"))
        .and(path(REFRESH_PATH))
        .and(body_json(json!({"refresh_token": "refresh-1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(refresh_body("access-2", "refresh-2")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let token = harness.api.refresh_session().await.unwrap();

    assert_eq!(token, "access-2");
    assert_eq!(harness.store.refresh_token().as_deref(), Some("refresh-2"));
}

#[tokio::test]
async fn test_tenant_refresh_without_refresh_token_uses_bearer() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Tenant);
    harness.sign_in("access-1", None);

    Mock::given(method("POST"))
        .and(path("/v1/tenant/auth/refresh"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-2",
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = harness.api.refresh_session().await.unwrap();

    assert_eq!(token, "access-2");
    assert!(harness.store.refresh_token().is_none());
}

#[tokio::test]
async fn test_server_error_maps_to_server_variant() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    harness.sign_in("access-1", None);

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let result = AdminDashboardService::new(harness.api.clone()).stats().await;

    assert!(matches!(result, Err(ClientError::Server { status: 500, .. })));
}

#[tokio::test]
async fn test_not_found_maps_to_api_error_with_detail() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Tenant);
    harness.sign_in("access-1", None);

    Mock::given(method("GET"))
        .and(path("/v1/tenant/bots/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Bot not found"})))
        .mount(&server)
        .await;

    let err = BotService::new(harness.api.clone())
        .get("missing")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.user_message(), "Bot not found");
    assert!(err.to_string().contains("NOT_FOUND"));
}

#[tokio::test]
async fn test_data_envelope_is_unwrapped_when_configured() {
    let server = MockServer::start().await;
    let harness = Harness::with_envelope(&server, DashboardKind::Admin, EnvelopeMode::Data);
    harness.sign_in("access-1", None);

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": admin_stats()})))
        .mount(&server)
        .await;

    let stats = AdminDashboardService::new(harness.api.clone())
        .stats()
        .await
        .unwrap();

    assert_eq!(stats.active_tenants, 10);
}

#[tokio::test]
async fn test_missing_data_envelope_is_a_decode_error() {
    let server = MockServer::start().await;
    let harness = Harness::with_envelope(&server, DashboardKind::Admin, EnvelopeMode::Data);
    harness.sign_in("access-1", None);

    Mock::given(method("GET"))
        .and(path(STATS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(admin_stats()))
        .mount(&server)
        .await;

    let result = AdminDashboardService::new(harness.api.clone()).stats().await;

    assert!(matches!(result, Err(ClientError::Json { .. })));
}

#[tokio::test]
async fn test_invalid_input_fails_before_any_request() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Tenant);
    harness.sign_in("access-1", None);

    Mock::given(method("POST"))
        .and(path("/v1/tenant/bots/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(Value::Null))
        .expect(0)
        .mount(&server)
        .await;

    let mut bot = NewBot::new("Support", "provider-1");
    bot.temperature = 3.5;

    let result = BotService::new(harness.api.clone()).create(&bot).await;

    assert!(matches!(result, Err(ClientError::Validation { .. })));
}
