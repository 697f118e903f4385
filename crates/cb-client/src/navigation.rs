//! Where the user is sent. Replaces browser navigation: a full-page redirect
//! becomes a call to [`Navigator::navigate`].

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Public sign-in page
    Login,
    /// Landing page after sign-in
    Dashboard,
    /// Any other page; always protected
    Path(String),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        match path.trim_end_matches('/') {
            LOGIN_PATH => Self::Login,
            DASHBOARD_PATH | "" => Self::Dashboard,
            other => Self::Path(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Dashboard => DASHBOARD_PATH,
            Self::Path(path) => path,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Self::Login)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &Route);
}
