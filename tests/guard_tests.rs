use navguard::access::level::AccessLevel;
use navguard::guard::{GuardDecision, GuardPaths, NavigationGuard};
use navguard::models::route::RouteTarget;
use navguard::models::user::LoginUser;
use navguard::session::SessionProvider;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Session provider double: resolves every refresh to a fixed user and
/// counts how many refreshes the guard triggered.
struct StubSession {
    cached: RwLock<Option<Arc<LoginUser>>>,
    resolves_to: LoginUser,
    refreshes: AtomicUsize,
}

impl StubSession {
    fn empty(resolves_to: LoginUser) -> Self {
        Self {
            cached: RwLock::new(None),
            resolves_to,
            refreshes: AtomicUsize::new(0),
        }
    }

    fn cached(user: LoginUser) -> Self {
        Self {
            cached: RwLock::new(Some(Arc::new(user.clone()))),
            resolves_to: user,
            refreshes: AtomicUsize::new(0),
        }
    }

    fn refresh_count(&self) -> usize {
        self.refreshes.load(Ordering::SeqCst)
    }
}

impl SessionProvider for StubSession {
    fn current_user(&self) -> Option<Arc<LoginUser>> {
        self.cached.read().unwrap().clone()
    }

    async fn refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::SeqCst);
        *self.cached.write().unwrap() = Some(Arc::new(self.resolves_to.clone()));
    }
}

fn user(role: AccessLevel) -> LoginUser {
    LoginUser::new(Some(1), Some("tester".to_string()), Some(role))
}

fn admin_route() -> RouteTarget {
    RouteTarget::new("/admin").with_access(AccessLevel::Admin)
}

#[tokio::test]
async fn public_route_proceeds_without_session() {
    let session = Arc::new(StubSession::empty(LoginUser::anonymous()));
    let guard = NavigationGuard::new(Arc::clone(&session));

    let decision = guard.before_each(&RouteTarget::new("/")).await;

    assert_eq!(decision, GuardDecision::Proceed);
}

#[tokio::test]
async fn public_route_proceeds_even_when_refresh_resolves_anonymous() {
    // The refresh may run, but its result must not affect the decision.
    let session = Arc::new(StubSession::empty(LoginUser::anonymous()));
    let guard = NavigationGuard::new(Arc::clone(&session));

    let decision = guard.before_each(&RouteTarget::new("/about")).await;

    assert_eq!(decision, GuardDecision::Proceed);
}

#[tokio::test]
async fn public_route_proceeds_for_authenticated_user() {
    let session = Arc::new(StubSession::cached(user(AccessLevel::User)));
    let guard = NavigationGuard::new(Arc::clone(&session));

    let decision = guard.before_each(&RouteTarget::new("/")).await;

    assert_eq!(decision, GuardDecision::Proceed);
    assert_eq!(session.refresh_count(), 0);
}

#[tokio::test]
async fn empty_user_redirects_to_login_with_redirect_back() {
    let session = Arc::new(StubSession::empty(LoginUser::anonymous()));
    let guard = NavigationGuard::new(Arc::clone(&session));

    let decision = guard.before_each(&admin_route()).await;

    assert_eq!(
        decision,
        GuardDecision::RedirectLogin {
            location: "/user/login?redirect=/admin".to_string()
        }
    );
    assert_eq!(session.refresh_count(), 1);
}

#[tokio::test]
async fn sentinel_role_user_redirects_to_login() {
    let session = Arc::new(StubSession::cached(user(AccessLevel::NotLogin)));
    let guard = NavigationGuard::new(Arc::clone(&session));

    let decision = guard.before_each(&admin_route()).await;

    assert!(matches!(decision, GuardDecision::RedirectLogin { .. }));
}

#[tokio::test]
async fn redirect_back_carries_full_path_with_query() {
    let session = Arc::new(StubSession::empty(LoginUser::anonymous()));
    let guard = NavigationGuard::new(Arc::clone(&session));

    let target = RouteTarget::new("/app/chat")
        .with_full_path("/app/chat?appId=7")
        .with_access(AccessLevel::User);
    let decision = guard.before_each(&target).await;

    assert_eq!(
        decision.location(),
        Some("/user/login?redirect=/app/chat?appId=7")
    );
}

#[tokio::test]
async fn insufficient_role_redirects_to_no_auth() {
    // No cached user; the refresh resolves to a plain user, which is not
    // enough for /admin.
    let session = Arc::new(StubSession::empty(user(AccessLevel::User)));
    let guard = NavigationGuard::new(Arc::clone(&session));

    let decision = guard.before_each(&admin_route()).await;

    assert_eq!(
        decision,
        GuardDecision::RedirectNoAuth {
            location: "/noAuth".to_string()
        }
    );
    assert_eq!(session.refresh_count(), 1);
}

#[tokio::test]
async fn sufficient_role_proceeds() {
    let session = Arc::new(StubSession::cached(user(AccessLevel::Admin)));
    let guard = NavigationGuard::new(Arc::clone(&session));

    let decision = guard.before_each(&admin_route()).await;

    assert_eq!(decision, GuardDecision::Proceed);
}

#[tokio::test]
async fn higher_role_satisfies_lower_requirement() {
    let session = Arc::new(StubSession::cached(user(AccessLevel::Admin)));
    let guard = NavigationGuard::new(Arc::clone(&session));

    let target = RouteTarget::new("/app").with_access(AccessLevel::User);
    let decision = guard.before_each(&target).await;

    assert_eq!(decision, GuardDecision::Proceed);
}

#[tokio::test]
async fn cached_sufficient_session_never_refreshes_again() {
    let session = Arc::new(StubSession::cached(user(AccessLevel::Admin)));
    let guard = NavigationGuard::new(Arc::clone(&session));

    let first = guard.before_each(&admin_route()).await;
    let second = guard.before_each(&admin_route()).await;

    assert_eq!(first, GuardDecision::Proceed);
    assert_eq!(second, GuardDecision::Proceed);
    assert_eq!(session.refresh_count(), 0);
}

#[tokio::test]
async fn anonymous_resolution_refreshes_on_every_attempt() {
    // An anonymous result carries no role, so the next attempt asks again.
    let session = Arc::new(StubSession::empty(LoginUser::anonymous()));
    let guard = NavigationGuard::new(Arc::clone(&session));

    guard.before_each(&admin_route()).await;
    guard.before_each(&admin_route()).await;

    assert_eq!(session.refresh_count(), 2);
}

#[tokio::test]
async fn custom_paths_are_used_in_redirects() {
    let paths = GuardPaths {
        login_path: "/signin".to_string(),
        no_auth_path: "/denied".to_string(),
    };

    let session = Arc::new(StubSession::empty(LoginUser::anonymous()));
    let guard = NavigationGuard::with_paths(Arc::clone(&session), paths.clone());
    let decision = guard.before_each(&admin_route()).await;
    assert_eq!(decision.location(), Some("/signin?redirect=/admin"));

    let session = Arc::new(StubSession::cached(user(AccessLevel::User)));
    let guard = NavigationGuard::with_paths(Arc::clone(&session), paths);
    let decision = guard.before_each(&admin_route()).await;
    assert_eq!(decision.location(), Some("/denied"));
}

#[tokio::test]
async fn memory_session_integrates_with_guard() {
    use navguard::session::MemorySession;

    let session = Arc::new(MemorySession::new(|| async {
        user(AccessLevel::Admin)
    }));
    let guard = NavigationGuard::new(Arc::clone(&session));

    let decision = guard.before_each(&admin_route()).await;

    assert_eq!(decision, GuardDecision::Proceed);
    assert_eq!(
        session.current_user().unwrap().role,
        Some(AccessLevel::Admin)
    );
}
