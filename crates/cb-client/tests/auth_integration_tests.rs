//! AuthService against a wiremock backend

mod common;

use crate::common::{Harness, admin_user, tenant_identity};

use cb_client::{AuthService, ClientError, TokenStore};
use cb_config::DashboardKind;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path},
};

async fn mount_admin_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/admin/auth/login"))
        .and(body_json(json!({"email": "admin@example.test", "password": "correct-horse"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "access-1",
            "refresh_token": "refresh-1",
            "token_type": "bearer",
            "user": admin_user()
        })))
        .expect(1)
        .mount(server)
        .await;
}

// =========================================================================
// Login
// =========================================================================

#[tokio::test]
async fn test_admin_login_stores_tokens_and_identity() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    mount_admin_login(&server).await;

    let auth = AuthService::new(harness.api.clone());
    let session = auth
        .login("admin@example.test", "correct-horse")
        .await
        .unwrap();

    assert_eq!(session.access_token, "access-1");
    assert_eq!(session.refresh_token.as_deref(), Some("refresh-1"));
    assert_eq!(session.user.role, "super_admin");
    assert!(session.user.is_admin());
    assert_eq!(harness.store.access_token().as_deref(), Some("access-1"));
    assert_eq!(harness.store.cached_user(), Some(session.user));
    assert!(auth.is_authenticated());
}

#[tokio::test]
async fn test_tenant_login_reads_tenant_and_fills_default_role() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Tenant);

    Mock::given(method("POST"))
        .and(path("/v1/tenant/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tenant-access",
            "token_type": "bearer",
            "tenant": tenant_identity()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let session = AuthService::new(harness.api.clone())
        .login("owner@acme.test", "secret-pass")
        .await
        .unwrap();

    assert_eq!(session.user.name, "Acme");
    assert_eq!(session.user.role, "tenant");
    assert!(session.refresh_token.is_none());
    assert!(harness.store.refresh_token().is_none());
}

#[tokio::test]
async fn test_login_rejected_stores_nothing() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);

    Mock::given(method("POST"))
        .and(path("/admin/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Incorrect email or password"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = AuthService::new(harness.api.clone())
        .login("admin@example.test", "wrong")
        .await;

    assert!(matches!(result, Err(ClientError::InvalidCredentials { .. })));
    assert!(harness.store.access_token().is_none());
    assert!(harness.store.cached_user().is_none());
}

#[tokio::test]
async fn test_login_to_locked_account_returns_server_message() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);

    Mock::given(method("POST"))
        .and(path("/admin/auth/login"))
        .respond_with(ResponseTemplate::new(423).set_body_json(json!({
            "detail": "Account is locked due to too many failed attempts"
        })))
        .mount(&server)
        .await;

    let err = AuthService::new(harness.api.clone())
        .login("admin@example.test", "whatever")
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(423));
    assert!(err.user_message().contains("locked"));
}

#[tokio::test]
async fn test_login_with_empty_email_never_hits_server() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);

    Mock::given(method("POST"))
        .and(path("/admin/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = AuthService::new(harness.api.clone())
        .login("  ", "password")
        .await;

    assert!(matches!(result, Err(ClientError::Validation { .. })));
}

// =========================================================================
// Logout
// =========================================================================

#[tokio::test]
async fn test_logout_clears_tokens_even_when_server_fails() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    harness.sign_in("access-1", Some("refresh-1"));

    Mock::given(method("POST"))
        .and(path("/admin/auth/logout"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let result = AuthService::new(harness.api.clone()).logout().await;

    assert!(result.is_ok());
    assert!(harness.store.access_token().is_none());
    assert!(harness.store.refresh_token().is_none());
}

#[tokio::test]
async fn test_logout_clears_tokens_when_server_unreachable() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    harness.sign_in("access-1", Some("refresh-1"));
    harness
        .store
        .cache_user(&serde_json::from_value(admin_user()).unwrap())
        .unwrap();
    drop(server);

    let result = AuthService::new(harness.api.clone()).logout().await;

    assert!(result.is_ok(), "{result:?}");
    assert!(harness.store.access_token().is_none());
    assert!(harness.store.refresh_token().is_none());
    assert!(harness.store.cached_user().is_none());
}

#[tokio::test]
async fn test_logout_without_session_skips_server() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Tenant);

    Mock::given(method("POST"))
        .and(path("/v1/tenant/auth/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = AuthService::new(harness.api.clone()).logout().await;

    assert!(result.is_ok());
}

// =========================================================================
// Profile and session checks
// =========================================================================

#[tokio::test]
async fn test_get_profile_caches_identity() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Tenant);
    harness.sign_in("access-1", None);

    Mock::given(method("GET"))
        .and(path("/v1/tenant/auth/me"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(tenant_identity()))
        .expect(1)
        .mount(&server)
        .await;

    let user = AuthService::new(harness.api.clone())
        .get_profile()
        .await
        .unwrap();

    assert_eq!(user.email.as_deref(), Some("owner@acme.test"));
    assert_eq!(harness.store.cached_user(), Some(user));
}

#[tokio::test]
async fn test_no_token_is_unauthenticated_without_network() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);

    Mock::given(method("GET"))
        .and(path("/admin/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(admin_user()))
        .expect(0)
        .mount(&server)
        .await;

    let auth = AuthService::new(harness.api.clone());

    assert!(!auth.is_authenticated());
    assert!(!auth.verify_session().await.unwrap());
}

#[tokio::test]
async fn test_optimistic_and_verified_checks_can_disagree() {
    let server = MockServer::start().await;
    let harness = Harness::new(&server, DashboardKind::Admin);
    harness.sign_in("expired", None);

    Mock::given(method("GET"))
        .and(path("/admin/auth/profile"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Token has expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthService::new(harness.api.clone());

    assert!(auth.is_authenticated());
    assert!(!auth.verify_session().await.unwrap());
}
