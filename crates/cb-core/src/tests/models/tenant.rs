use crate::{NewTenant, Page, Tenant, TenantListQuery};

#[test]
fn test_tenant_list_query_defaults_are_valid() {
    assert!(TenantListQuery::default().validate().is_ok());
}

#[test]
fn test_tenant_list_query_rejects_per_page_over_limit() {
    let query = TenantListQuery {
        per_page: 101,
        ..Default::default()
    };
    assert!(query.validate().is_err());
}

#[test]
fn test_tenant_list_query_rejects_page_zero() {
    let query = TenantListQuery {
        page: 0,
        ..Default::default()
    };
    assert!(query.validate().is_err());
}

#[test]
fn test_new_tenant_rejects_short_password() {
    let tenant = NewTenant {
        name: "Acme".into(),
        slug: "acme".into(),
        password: Some("short".into()),
        plan: "free".into(),
        is_active: true,
        ..Default::default()
    };

    let err = tenant.validate().unwrap_err();

    assert!(err.to_string().contains("password"));
}

#[test]
fn test_tenant_page_deserializes() {
    let json = r#"{
        "items": [{
            "id": "t-1", "name": "Acme", "slug": "acme", "plan": "pro", "is_active": true,
            "created_at": "2025-09-10T05:30:00", "updated_at": "2025-09-10T05:30:00Z",
            "usage_stats": {"total_chats": 3, "total_messages": 9, "total_tokens_used": 120,
                            "active_users": 2, "storage_used_mb": 0.5, "last_activity": null}
        }],
        "total": 11, "page": 1, "per_page": 10, "pages": 2
    }"#;

    let page: Page<Tenant> = serde_json::from_str(json).unwrap();

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].usage_stats.as_ref().unwrap().total_chats, 3);
    assert!(page.has_next());
    assert!(!page.has_prev());
}
