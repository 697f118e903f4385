//! Typed calls behind the dashboard pages. Everything goes through
//! [`ApiClient`](crate::ApiClient), so every call carries the bearer token and
//! gets the refresh-and-retry on 401.

pub(crate) mod admin_dashboard;
pub(crate) mod ai_providers;
pub(crate) mod bots;
pub(crate) mod conversations;
pub(crate) mod datasets;
pub(crate) mod documents;
pub(crate) mod settings;
pub(crate) mod tenant_dashboard;
pub(crate) mod tenants;
