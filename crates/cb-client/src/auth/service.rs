use crate::{ApiClient, ClientError, ClientResult};

use cb_core::{AuthSession, CoreError, Identity, LoginRequest, LoginResponse};

use std::sync::Arc;

use log::{info, warn};
use reqwest::Method;
use serde_json::Value;

/// Sign-in, sign-out and session checks for one dashboard
pub struct AuthService {
    api: Arc<ApiClient>,
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &Arc<ApiClient> {
        &self.api
    }

    /// Exchange credentials for a session.
    ///
    /// Any previous session is discarded first. A 401 or 403 means the
    /// credentials were rejected; a locked account (423) comes back as
    /// [`ClientError::Api`] with the server's message.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<AuthSession> {
        if email.trim().is_empty() {
            return Err(CoreError::validation("email", "cannot be empty").into());
        }
        if password.is_empty() {
            return Err(CoreError::validation("password", "cannot be empty").into());
        }

        let endpoints = self.api.endpoints();
        let req = self
            .api
            .request(Method::POST, endpoints.login)?
            .json(&LoginRequest { email, password });

        let response: LoginResponse = match self.api.execute_once(req).await {
            Ok(response) => response,
            Err(ClientError::Unauthorized { message, .. }) => {
                return Err(ClientError::invalid_credentials(message));
            }
            Err(ClientError::Api {
                status: 403,
                message,
                ..
            }) => return Err(ClientError::invalid_credentials(message)),
            Err(e) => return Err(e),
        };

        let store = self.api.store();
        let user = response.user.with_default_role(self.api.kind());

        store.clear()?;
        store.set_tokens(&response.access_token, response.refresh_token.as_deref())?;
        store.cache_user(&user)?;

        info!("Signed in to {} dashboard as {}", self.api.kind(), user.id);

        Ok(AuthSession {
            user,
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        })
    }

    /// Tell the server, then forget the session locally whatever it said.
    pub async fn logout(&self) -> ClientResult<()> {
        if self.is_authenticated()
            && let Err(e) = self.notify_logout().await
        {
            warn!("Server logout failed, clearing local session anyway: {e}");
        }

        self.clear_session()?;
        info!("Signed out of {} dashboard", self.api.kind());
        Ok(())
    }

    async fn notify_logout(&self) -> ClientResult<Value> {
        let req = self
            .api
            .request(Method::POST, self.api.endpoints().logout)?;
        let req = self.api.with_stored_bearer(req);
        self.api.execute_once(req).await
    }

    /// Renew the session; returns the new access token
    pub async fn refresh(&self) -> ClientResult<String> {
        self.api.refresh_session().await
    }

    /// Fetch the signed-in identity and cache it
    pub async fn get_profile(&self) -> ClientResult<Identity> {
        let user: Identity = self.api.get(self.api.endpoints().profile).await?;
        let user = user.with_default_role(self.api.kind());
        self.api.store().cache_user(&user)?;
        Ok(user)
    }

    /// Optimistic: a token is stored. Says nothing about whether the server
    /// still accepts it.
    pub fn is_authenticated(&self) -> bool {
        self.api.store().access_token().is_some()
    }

    /// Verified: the server accepted the stored token.
    ///
    /// Network and server failures are errors, not a `false`.
    pub async fn verify_session(&self) -> ClientResult<bool> {
        if !self.is_authenticated() {
            return Ok(false);
        }

        match self.get_profile().await {
            Ok(_) => Ok(true),
            Err(e) if e.is_session_expired() => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn cached_user(&self) -> Option<Identity> {
        self.api.store().cached_user()
    }

    pub fn clear_session(&self) -> ClientResult<()> {
        self.api.store().clear()?;
        Ok(())
    }
}
