use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use serde_json::Value;
use tracing::debug;

/// Fetched user data stays fresh for five minutes.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheItem {
    data: Value,
    stored_at: Instant,
}

/// In-process cache of per-user data, keyed by `(user_id, data_type)`.
/// Cloning shares the underlying store.
#[derive(Clone)]
pub struct UserCache {
    ttl: Duration,
    entries: Arc<Mutex<HashMap<(String, String), CacheItem>>>,
}

impl Default for UserCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }
}

impl UserCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn set(&self, user_id: &str, data_type: &str, data: Value) {
        self.lock().insert(
            key(user_id, data_type),
            CacheItem {
                data,
                stored_at: Instant::now(),
            },
        );
    }

    /// Returns the cached value while fresh. Expired entries are dropped on read.
    pub fn get(&self, user_id: &str, data_type: &str) -> Option<Value> {
        let mut entries = self.lock();
        let key = key(user_id, data_type);

        let age = entries.get(&key)?.stored_at.elapsed();
        if age < self.ttl {
            return entries.get(&key).map(|item| item.data.clone());
        }

        debug!("Cache entry {data_type} for user {user_id} expired");
        entries.remove(&key);
        None
    }

    pub fn remove(&self, user_id: &str, data_type: &str) {
        self.lock().remove(&key(user_id, data_type));
    }

    /// Drops every entry belonging to `user_id`.
    pub fn clear_user(&self, user_id: &str) {
        self.lock().retain(|(owner, _), _| owner != user_id);
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<(String, String), CacheItem>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn key(user_id: &str, data_type: &str) -> (String, String) {
    (user_id.to_string(), data_type.to_string())
}
