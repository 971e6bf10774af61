// Application state (AppState)

use crate::core::config::Config;
use crate::guard::GuardPaths;
use crate::models::route::RouteTable;
use crate::session::http::SessionClient;
use crate::stores::session_cache::SessionCache;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

/// Shared gateway state
///
/// Everything request handlers need, wrapped in Arc for cheap cloning.
/// The session cache is the only mutable piece and is written exclusively
/// by session providers.
#[derive(Clone)]
pub struct AppState {
    /// Resolved login users, keyed by Cookie header value
    pub sessions: Arc<SessionCache>,

    /// Client for the backend session endpoint
    pub session_client: Arc<SessionClient>,

    /// Access requirements declared by the route table
    pub routes: Arc<RouteTable>,

    /// Redirect targets for denied navigations
    pub guard_paths: GuardPaths,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let session_client = SessionClient::new(
            config.session.endpoint.clone(),
            Duration::from_secs(config.session.fetch_timeout_secs),
        )?;

        let guard_paths = GuardPaths {
            login_path: config.guard.login_path.clone(),
            no_auth_path: config.guard.no_auth_path.clone(),
        };

        Ok(Self {
            sessions: Arc::new(SessionCache::with_capacity(config.session.cache_capacity)),
            session_client: Arc::new(session_client),
            routes: Arc::new(RouteTable::new(config.routes.clone())),
            guard_paths,
            config: Arc::new(config),
        })
    }
}
