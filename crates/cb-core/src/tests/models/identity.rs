use crate::{DashboardKind, Identity};

#[test]
fn given_missing_role_when_with_default_role_then_uses_dashboard_role() {
    let json = r#"{"id":"t-1","name":"Acme","email":"ops@acme.test","slug":"acme"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    let identity = identity.with_default_role(DashboardKind::Tenant);

    assert_eq!(identity.role, "tenant");
    assert!(!identity.is_admin());
}

#[test]
fn given_explicit_role_when_with_default_role_then_kept() {
    let identity = Identity {
        id: "u-1".into(),
        name: "Root".into(),
        email: None,
        role: "super_admin".into(),
    };

    let identity = identity.with_default_role(DashboardKind::Tenant);

    assert_eq!(identity.role, "super_admin");
    assert!(identity.is_admin());
}
