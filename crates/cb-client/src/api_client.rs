use crate::{
    ApiPath, AuthEndpoints, ClientError, ClientResult, Navigator, Route, TokenStore,
    error_body::ErrorBody,
};

use cb_config::{ApiConfig, EnvelopeMode};
use cb_core::{DashboardKind, RefreshRequest, RefreshResponse};

use std::sync::{Arc, PoisonError, RwLock};

use log::{debug, info, warn};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, StatusCode, Url};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tokio::sync::Mutex;

type SessionEndHook = Box<dyn Fn() + Send + Sync>;

/// HTTP client for the chatbot backend.
///
/// Injects the stored bearer token into every request and, when a request
/// comes back 401, refreshes the session once and replays the request once.
/// Concurrent 401s share a single refresh.
///
/// Ids placed in a request path go through [`ApiPath::segment`] and are
/// percent-encoded as a single segment.
pub struct ApiClient {
    base_url: String,
    kind: DashboardKind,
    envelope: EnvelopeMode,
    endpoints: AuthEndpoints,
    store: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    client: ReqwestClient,
    refresh_lock: Mutex<()>,
    session_end_hooks: RwLock<Vec<SessionEndHook>>,
}

impl ApiClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `config` - Base URL, timeout, envelope mode and dashboard kind
    /// * `store` - Where the session lives
    /// * `navigator` - Receives the login redirect when the session ends
    pub fn new(
        config: &ApiConfig,
        store: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let base_url = config.normalized_base_url();
        Url::parse(&base_url).map_err(|e| ClientError::invalid_url(&base_url, e.to_string()))?;

        let client = ReqwestClient::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            base_url,
            kind: config.dashboard,
            envelope: config.envelope,
            endpoints: AuthEndpoints::for_kind(config.dashboard),
            store,
            navigator,
            client,
            refresh_lock: Mutex::new(()),
            session_end_hooks: RwLock::new(Vec::new()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn kind(&self) -> DashboardKind {
        self.kind
    }

    pub fn endpoints(&self) -> AuthEndpoints {
        self.endpoints
    }

    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    /// Run `hook` every time a failed refresh ends the session, after the
    /// store is cleared and the login redirect is issued.
    pub fn on_session_end(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.session_end_hooks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Box::new(hook));
    }

    // =========================================================================
    // Authenticated Requests
    // =========================================================================

    pub async fn get<T: DeserializeOwned>(&self, path: impl Into<ApiPath>) -> ClientResult<T> {
        let url = self.url(&path.into(), &[])?;
        self.execute(|| self.client.request(Method::GET, url.clone()))
            .await
    }

    /// GET with query parameters; `None` values are omitted
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: impl Into<ApiPath>,
        query: &[(&str, Option<String>)],
    ) -> ClientResult<T> {
        let url = self.url(&path.into(), query)?;
        self.execute(|| self.client.request(Method::GET, url.clone()))
            .await
    }

    pub async fn post<T, B>(&self, path: impl Into<ApiPath>, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(&path.into(), &[])?;
        let body = serde_json::to_value(body)?;
        self.execute(|| self.client.request(Method::POST, url.clone()).json(&body))
            .await
    }

    /// POST without a body
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        path: impl Into<ApiPath>,
    ) -> ClientResult<T> {
        let url = self.url(&path.into(), &[])?;
        self.execute(|| self.client.request(Method::POST, url.clone()))
            .await
    }

    pub async fn put<T, B>(&self, path: impl Into<ApiPath>, body: &B) -> ClientResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(&path.into(), &[])?;
        let body = serde_json::to_value(body)?;
        self.execute(|| self.client.request(Method::PUT, url.clone()).json(&body))
            .await
    }

    /// DELETE; any success body is discarded
    pub async fn delete(&self, path: impl Into<ApiPath>) -> ClientResult<()> {
        self.delete_with_query(path, &[]).await
    }

    /// DELETE with query parameters; `None` values are omitted
    pub async fn delete_with_query(
        &self,
        path: impl Into<ApiPath>,
        query: &[(&str, Option<String>)],
    ) -> ClientResult<()> {
        let url = self.url(&path.into(), query)?;
        let response = self
            .send_with_refresh(|| self.client.request(Method::DELETE, url.clone()))
            .await?;
        Self::check_status(response).await
    }

    /// Proactively renew the session.
    ///
    /// Uses the stored refresh token when there is one, otherwise the current
    /// access token as bearer. On failure the session is ended exactly as for
    /// a failed refresh after a 401.
    pub async fn refresh_session(&self) -> ClientResult<String> {
        let _guard = self.refresh_lock.lock().await;

        let refresh_token = self.store.refresh_token();
        let access_token = self.store.access_token();
        if refresh_token.is_none() && access_token.is_none() {
            return Err(ClientError::unauthorized("no session to refresh"));
        }

        self.refresh_locked(refresh_token.as_deref(), access_token.as_deref())
            .await
    }

    // =========================================================================
    // Requests Outside the Interceptor
    // =========================================================================

    /// Build a request with no bearer token and no refresh handling
    pub(crate) fn request(
        &self,
        method: Method,
        path: impl Into<ApiPath>,
    ) -> ClientResult<RequestBuilder> {
        let url = self.url(&path.into(), &[])?;
        Ok(self.client.request(method, url))
    }

    /// Attach the stored access token, if any
    pub(crate) fn with_stored_bearer(&self, req: RequestBuilder) -> RequestBuilder {
        match self.store.access_token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Send once and decode; a 401 is returned as-is
    pub(crate) async fn execute_once<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> ClientResult<T> {
        let response = req.send().await?;
        self.decode(response).await
    }

    // =========================================================================
    // Interceptor
    // =========================================================================

    async fn execute<T, F>(&self, build: F) -> ClientResult<T>
    where
        T: DeserializeOwned,
        F: Fn() -> RequestBuilder,
    {
        let response = self.send_with_refresh(build).await?;
        self.decode(response).await
    }

    async fn send_with_refresh<F>(&self, build: F) -> ClientResult<Response>
    where
        F: Fn() -> RequestBuilder,
    {
        let sent_token = self.store.access_token();
        let response = Self::authorize(build(), sent_token.as_deref())
            .send()
            .await?;

        debug!("{} {}", response.status().as_u16(), response.url().path());

        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        match self.recover(sent_token.as_deref()).await? {
            // Replayed exactly once; a second 401 is decoded as Unauthorized.
            Some(token) => Ok(Self::authorize(build(), Some(&token)).send().await?),
            None => Ok(response),
        }
    }

    /// Obtain a usable access token after a 401, or `None` when there is no
    /// way to refresh and the 401 should surface.
    async fn recover(&self, stale_token: Option<&str>) -> ClientResult<Option<String>> {
        let _guard = self.refresh_lock.lock().await;

        let current = self.store.access_token();
        if current.as_deref() != stale_token {
            return match current {
                Some(token) => {
                    debug!("Session already refreshed by a concurrent request");
                    Ok(Some(token))
                }
                None => Err(ClientError::refresh_failed(
                    "session ended while waiting for refresh",
                )),
            };
        }

        let Some(refresh_token) = self.store.refresh_token() else {
            debug!("No refresh token stored; surfacing 401");
            return Ok(None);
        };

        self.refresh_locked(Some(&refresh_token), None)
            .await
            .map(Some)
    }

    /// Call the refresh endpoint. Caller holds `refresh_lock`.
    async fn refresh_locked(
        &self,
        refresh_token: Option<&str>,
        bearer: Option<&str>,
    ) -> ClientResult<String> {
        info!("Refreshing {} session", self.kind);

        match self.call_refresh(refresh_token, bearer).await {
            Ok(refreshed) => {
                self.store
                    .set_tokens(&refreshed.access_token, refreshed.refresh_token.as_deref())?;
                info!("Session refreshed");
                Ok(refreshed.access_token)
            }
            Err(e) => {
                warn!("Session refresh failed: {e}");
                self.end_session();
                Err(ClientError::refresh_failed(e.user_message()))
            }
        }
    }

    async fn call_refresh(
        &self,
        refresh_token: Option<&str>,
        bearer: Option<&str>,
    ) -> ClientResult<RefreshResponse> {
        let mut req = self.request(Method::POST, self.endpoints.refresh)?;
        if let Some(token) = bearer {
            req = req.bearer_auth(token);
        }
        if let Some(refresh_token) = refresh_token {
            req = req.json(&RefreshRequest { refresh_token });
        }
        self.execute_once(req).await
    }

    fn end_session(&self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to clear session after refresh failure: {e}");
        }
        self.navigator.navigate(&Route::Login);

        let hooks = self
            .session_end_hooks
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for hook in hooks.iter() {
            hook();
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn authorize(req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    fn url(&self, path: &ApiPath, query: &[(&str, Option<String>)]) -> ClientResult<Url> {
        path.validate()?;

        let raw = format!("{}{}", self.base_url, path.prefix());
        let mut url = Url::parse(&raw).map_err(|e| ClientError::invalid_url(&raw, e.to_string()))?;

        if !path.segments().is_empty() {
            url.path_segments_mut()
                .map_err(|()| ClientError::invalid_url(&raw, "URL cannot carry path segments"))?
                .extend(path.segments());
        }

        if query.iter().any(|(_, value)| value.is_some()) {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                if let Some(value) = value {
                    pairs.append_pair(name, value);
                }
            }
        }

        Ok(url)
    }

    async fn decode<T: DeserializeOwned>(&self, response: Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ErrorBody::parse(status, &text).into_error(status));
        }

        let body: Value = if text.trim().is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        let payload = self.unwrap_envelope(body)?;
        Ok(serde_json::from_value(payload)?)
    }

    async fn check_status(response: Response) -> ClientResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await?;
        Err(ErrorBody::parse(status, &text).into_error(status))
    }

    fn unwrap_envelope(&self, body: Value) -> ClientResult<Value> {
        match self.envelope {
            EnvelopeMode::Bare => Ok(body),
            EnvelopeMode::Data => match body {
                Value::Object(mut map) => map
                    .remove("data")
                    .ok_or_else(|| ClientError::decode("response body has no 'data' envelope")),
                _ => Err(ClientError::decode(
                    "response body is not an object with a 'data' envelope",
                )),
            },
        }
    }
}
