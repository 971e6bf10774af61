// Session providers: who owns the cached login user and how it refreshes

pub mod http;

use crate::models::user::LoginUser;
use std::future::Future;
use std::sync::{Arc, RwLock};

/// Contract the navigation guard consumes.
///
/// `current_user` is a synchronous read of the cached value. `refresh`
/// resolves only once a conclusive session state is known, authenticated or
/// explicitly anonymous; after it returns, `current_user` reflects the
/// freshest value. A failed fetch resolves to the anonymous user rather
/// than surfacing an error, so the guard never has to handle one.
pub trait SessionProvider: Send + Sync {
    fn current_user(&self) -> Option<Arc<LoginUser>>;

    fn refresh(&self) -> impl Future<Output = ()> + Send;
}

impl<P: SessionProvider> SessionProvider for Arc<P> {
    fn current_user(&self) -> Option<Arc<LoginUser>> {
        (**self).current_user()
    }

    fn refresh(&self) -> impl Future<Output = ()> + Send {
        (**self).refresh()
    }
}

/// Injectable in-memory session backed by a caller-supplied fetch.
///
/// The cached value lives in the provider instance, not in any
/// module-level global, so every test scenario can own an isolated
/// session. The fetch closure models the network call and may resolve to
/// an authenticated user or to [`LoginUser::anonymous`].
pub struct MemorySession<F> {
    user: RwLock<Option<Arc<LoginUser>>>,
    fetch: F,
}

impl<F, Fut> MemorySession<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = LoginUser> + Send,
{
    pub fn new(fetch: F) -> Self {
        Self {
            user: RwLock::new(None),
            fetch,
        }
    }

    /// Start with a value already cached, as after an earlier navigation.
    pub fn with_cached(user: LoginUser, fetch: F) -> Self {
        Self {
            user: RwLock::new(Some(Arc::new(user))),
            fetch,
        }
    }
}

impl<F, Fut> SessionProvider for MemorySession<F>
where
    F: Fn() -> Fut + Send + Sync,
    Fut: Future<Output = LoginUser> + Send,
{
    fn current_user(&self) -> Option<Arc<LoginUser>> {
        self.user
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    async fn refresh(&self) {
        let fetched = (self.fetch)().await;
        let mut slot = self.user.write().unwrap_or_else(|e| e.into_inner());
        // Whole-value replacement; the previous user is never patched.
        *slot = Some(Arc::new(fetched));
    }
}
