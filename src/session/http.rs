use crate::core::error::SessionError;
use crate::models::user::LoginUser;
use crate::session::SessionProvider;
use crate::stores::session_cache::SessionCache;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Response envelope used by the backend for every endpoint.
#[derive(Debug, Deserialize)]
pub struct BaseResponse<T> {
    pub code: i32,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope code the backend answers with when no session is active.
pub const NOT_LOGIN_CODE: i32 = 40100;

/// HTTP client for the backend session endpoint.
pub struct SessionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SessionClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// Fetch the current login user for the given Cookie header value.
    ///
    /// The backend's explicit "not logged in" code resolves to the
    /// anonymous user. Transport failures, bad statuses, undecodable
    /// bodies, and any other business code are errors for the caller to
    /// map.
    pub async fn fetch_login_user(&self, cookie: Option<&str>) -> Result<LoginUser, SessionError> {
        let mut request = self
            .client
            .get(format!("{}/user/get/login", self.endpoint));

        if let Some(cookie) = cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(SessionError::BadStatus(response.status()));
        }

        let envelope = response.json::<BaseResponse<LoginUser>>().await?;

        match envelope.code {
            0 => Ok(envelope.data.unwrap_or_else(LoginUser::anonymous)),
            NOT_LOGIN_CODE => {
                debug!("Backend reports no active session");
                Ok(LoginUser::anonymous())
            }
            code => Err(SessionError::Backend {
                code,
                message: envelope.message.unwrap_or_default(),
            }),
        }
    }
}

/// Session provider for one browser session, backed by the shared cache
/// and the backend session endpoint.
///
/// Constructed per navigation attempt from the gateway state; the cache
/// and client are shared, the cookie identifies the session. A failed
/// fetch resolves the session to the anonymous user, so the guard only
/// ever sees conclusive states.
pub struct HttpSession {
    client: Arc<SessionClient>,
    cache: Arc<SessionCache>,
    cookie: Option<String>,
}

impl HttpSession {
    pub fn new(client: Arc<SessionClient>, cache: Arc<SessionCache>, cookie: Option<String>) -> Self {
        Self {
            client,
            cache,
            cookie,
        }
    }

    fn cache_key(&self) -> &str {
        self.cookie.as_deref().unwrap_or("")
    }
}

impl SessionProvider for HttpSession {
    fn current_user(&self) -> Option<Arc<LoginUser>> {
        self.cache.get(self.cache_key())
    }

    async fn refresh(&self) {
        let user = match self.client.fetch_login_user(self.cookie.as_deref()).await {
            Ok(user) => user,
            Err(err) => {
                warn!(error = %err, "Session refresh failed, treating session as anonymous");
                LoginUser::anonymous()
            }
        };

        self.cache.insert(self.cache_key(), user);
    }
}
