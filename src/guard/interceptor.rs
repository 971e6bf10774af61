use crate::access::check::has_access;
use crate::access::level::AccessLevel;
use crate::models::route::RouteTarget;
use crate::session::SessionProvider;
use tracing::debug;

/// Where the guard sends users it turns away.
#[derive(Debug, Clone)]
pub struct GuardPaths {
    /// Login page; the intended destination rides along as `?redirect=`.
    pub login_path: String,
    /// Fixed page shown to authenticated users lacking the required role.
    pub no_auth_path: String,
}

impl Default for GuardPaths {
    fn default() -> Self {
        Self {
            login_path: "/user/login".to_string(),
            no_auth_path: "/noAuth".to_string(),
        }
    }
}

/// Terminal outcome of one navigation attempt. Exactly one is produced per
/// attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Proceed,
    RedirectLogin { location: String },
    RedirectNoAuth { location: String },
}

impl GuardDecision {
    pub fn location(&self) -> Option<&str> {
        match self {
            GuardDecision::Proceed => None,
            GuardDecision::RedirectLogin { location } => Some(location),
            GuardDecision::RedirectNoAuth { location } => Some(location),
        }
    }
}

/// The navigation interceptor: runs before every route transition and
/// decides whether it proceeds.
///
/// The session provider is injected, so each embedding (and each test)
/// owns its session state. The guard only reads the cached user; the
/// provider is the sole writer.
pub struct NavigationGuard<P> {
    provider: P,
    paths: GuardPaths,
}

impl<P: SessionProvider> NavigationGuard<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            paths: GuardPaths::default(),
        }
    }

    pub fn with_paths(provider: P, paths: GuardPaths) -> Self {
        Self { provider, paths }
    }

    /// Evaluate one navigation attempt to `to`.
    ///
    /// Awaits a session refresh only when no conclusive cached state
    /// exists; a cached user with an assigned role never triggers another
    /// fetch. A refresh that fails resolves to the anonymous user inside
    /// the provider, so this method is total: it always returns exactly
    /// one decision and never errors.
    pub async fn before_each(&self, to: &RouteTarget) -> GuardDecision {
        let mut login_user = self.provider.current_user();

        // No user yet, or a user without a role: not a conclusive state.
        // This is the single suspension point of the whole guard.
        if login_user.as_deref().map_or(true, |u| u.role.is_none()) {
            self.provider.refresh().await;
            login_user = self.provider.current_user();
        }

        debug!(
            path = %to.path,
            required = %to.access,
            role = login_user
                .as_deref()
                .and_then(|u| u.role)
                .map(|r| r.as_str())
                .unwrap_or("none"),
            "Evaluating navigation"
        );

        // Public routes pass regardless of who is asking.
        if to.access == AccessLevel::NotLogin {
            return GuardDecision::Proceed;
        }

        let user = login_user.as_deref();

        if !user.map_or(false, |u| u.is_authenticated()) {
            debug!(path = %to.path, "Unauthenticated, redirecting to login");
            return GuardDecision::RedirectLogin {
                location: format!("{}?redirect={}", self.paths.login_path, to.full_path),
            };
        }

        if !has_access(user, to.access) {
            debug!(path = %to.path, required = %to.access, "Insufficient role");
            return GuardDecision::RedirectNoAuth {
                location: self.paths.no_auth_path.clone(),
            };
        }

        GuardDecision::Proceed
    }
}
