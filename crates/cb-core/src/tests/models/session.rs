use crate::LoginResponse;

#[test]
fn given_admin_login_body_when_deserialize_then_reads_user_and_refresh_token() {
    let json = r#"{
        "access_token": "acc",
        "refresh_token": "ref",
        "token_type": "bearer",
        "user": {"id": "u-1", "email": "a@b.test", "name": "Admin", "role": "admin", "is_active": true}
    }"#;

    let response: LoginResponse = serde_json::from_str(json).unwrap();

    assert_eq!(response.access_token, "acc");
    assert_eq!(response.refresh_token.as_deref(), Some("ref"));
    assert_eq!(response.user.role, "admin");
}

#[test]
fn given_tenant_login_body_when_deserialize_then_reads_tenant_as_user() {
    let json = r#"{
        "access_token": "acc",
        "token_type": "bearer",
        "tenant": {"id": "t-1", "email": "t@b.test", "name": "Acme", "slug": "acme", "plan": "free"}
    }"#;

    let response: LoginResponse = serde_json::from_str(json).unwrap();

    assert!(response.refresh_token.is_none());
    assert_eq!(response.user.id, "t-1");
    assert!(response.user.role.is_empty());
}
