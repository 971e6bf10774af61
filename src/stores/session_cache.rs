use crate::models::user::LoginUser;
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory cache of resolved login users, keyed by the browser's Cookie
/// header value.
///
/// Values are replaced wholesale on every refresh; the anonymous user is a
/// cached value like any other, marking a session that was conclusively
/// resolved as not logged in.
///
/// Cookies are client-chosen, so the map is hard-bounded: once
/// `max_entries` sessions are cached, inserting a new one evicts an
/// arbitrary entry instead of growing the map.
pub struct SessionCache {
    users: DashMap<String, Arc<LoginUser>>,
    max_entries: usize,
}

impl SessionCache {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            max_entries: usize::MAX,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: DashMap::with_capacity(capacity),
            max_entries: capacity,
        }
    }

    /// Cache the resolved user for a session, replacing any previous value.
    ///
    /// Replacements never evict; only a brand-new session can push the
    /// cache over its bound.
    pub fn insert(&self, cookie: &str, user: LoginUser) {
        if !self.users.contains_key(cookie) && self.users.len() >= self.max_entries {
            self.evict_one();
        }
        self.users.insert(cookie.to_string(), Arc::new(user));
    }

    fn evict_one(&self) {
        let victim = self.users.iter().next().map(|entry| entry.key().clone());
        if let Some(key) = victim {
            self.users.remove(&key);
        }
    }

    pub fn get(&self, cookie: &str) -> Option<Arc<LoginUser>> {
        self.users.get(cookie).map(|entry| Arc::clone(entry.value()))
    }

    /// Drop a cached session, forcing the next navigation to re-fetch.
    pub fn remove(&self, cookie: &str) -> Option<Arc<LoginUser>> {
        self.users.remove(cookie).map(|(_, user)| user)
    }

    pub fn clear(&self) {
        self.users.clear();
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}
