use cb_core::DashboardKind;

/// Auth routes of one dashboard's backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthEndpoints {
    pub login: &'static str,
    pub logout: &'static str,
    pub refresh: &'static str,
    pub profile: &'static str,
}

impl AuthEndpoints {
    pub const ADMIN: Self = Self {
        login: "/admin/auth/login",
        logout: "/admin/auth/logout",
        refresh: "/admin/auth/refresh",
        profile: "/admin/auth/profile",
    };

    pub const TENANT: Self = Self {
        login: "/v1/tenant/auth/login",
        logout: "/v1/tenant/auth/logout",
        refresh: "/v1/tenant/auth/refresh",
        profile: "/v1/tenant/auth/me",
    };

    pub const fn for_kind(kind: DashboardKind) -> Self {
        match kind {
            DashboardKind::Admin => Self::ADMIN,
            DashboardKind::Tenant => Self::TENANT,
        }
    }
}
