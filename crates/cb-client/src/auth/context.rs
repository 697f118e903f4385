use crate::{AuthService, ClientResult, Navigator, Route};

use cb_core::{AuthSession, Identity};

use std::sync::{Arc, Weak};

use log::{info, warn};
use tokio::sync::{OnceCell, watch};

/// Published authentication state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<Identity>,
    /// User known and an access token still stored
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: true,
        }
    }
}

/// Process-wide auth state shared by everything that renders or guards pages.
///
/// Observers subscribe to a `watch` channel and see every transition,
/// including the session ending because a refresh failed mid-request.
pub struct AuthContext {
    auth: AuthService,
    navigator: Arc<dyn Navigator>,
    state: Arc<watch::Sender<AuthState>>,
    initialized: OnceCell<()>,
}

impl AuthContext {
    pub fn new(auth: AuthService) -> Self {
        let navigator = Arc::clone(auth.api().navigator());
        let (state, _) = watch::channel(AuthState::default());
        let state = Arc::new(state);

        let published: Weak<watch::Sender<AuthState>> = Arc::downgrade(&state);
        auth.api().on_session_end(move || {
            if let Some(state) = published.upgrade() {
                info!("Session ended; dropping signed-in user");
                state.send_modify(|state| {
                    state.user = None;
                    state.is_authenticated = false;
                });
            }
        });

        Self {
            auth,
            navigator,
            state,
            initialized: OnceCell::new(),
        }
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }

    /// Current state, with `is_authenticated` rechecked against the store
    pub fn snapshot(&self) -> AuthState {
        let mut state = self.state.borrow().clone();
        state.is_authenticated = state.user.is_some() && self.auth.is_authenticated();
        state
    }

    pub fn user(&self) -> Option<Identity> {
        self.state.borrow().user.clone()
    }

    /// Restore the session from storage. Runs once; later and concurrent
    /// calls wait for the first and return the current state.
    pub async fn initialize(&self) -> AuthState {
        self.initialized.get_or_init(|| self.restore()).await;
        self.snapshot()
    }

    async fn restore(&self) {
        let user = if !self.auth.is_authenticated() {
            None
        } else if let Some(user) = self.auth.cached_user() {
            Some(user)
        } else {
            match self.auth.get_profile().await {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!("Could not restore session: {e}");
                    if let Err(e) = self.auth.clear_session() {
                        warn!("Failed to clear session: {e}");
                    }
                    None
                }
            }
        };

        match user {
            Some(ref user) => info!("Session restored for {}", user.id),
            None => info!("No session to restore"),
        }

        self.publish(user);
    }

    /// Sign in, publish the user and go to the dashboard.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthSession> {
        let session = self.auth.login(email, password).await?;
        self.publish(Some(session.user.clone()));
        self.navigator.navigate(&Route::Dashboard);
        Ok(session)
    }

    /// Sign out, drop the user and go to the login page.
    ///
    /// The local session is gone even when this returns an error.
    pub async fn logout(&self) -> ClientResult<()> {
        let result = self.auth.logout().await;
        self.publish(None);
        self.navigator.navigate(&Route::Login);
        result
    }

    fn publish(&self, user: Option<Identity>) {
        let is_authenticated = user.is_some() && self.auth.is_authenticated();
        self.state.send_replace(AuthState {
            user,
            is_authenticated,
            is_loading: false,
        });
    }
}
