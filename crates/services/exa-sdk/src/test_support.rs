//! Helpers shared by unit and integration tests.
//!
//! Environment mutation is process-global; tests using [`EnvGuard`] must be
//! marked `#[serial(env)]`.

use serde_json::{Value, json};

use crate::{Client, ExaConfig};

/// Restores the environment variables it touched when dropped.
#[derive(Debug, Default)]
pub struct EnvGuard {
    saved: Vec<(&'static str, Option<String>)>,
}

impl EnvGuard {
    /// Sets `key` to `val` until the guard drops.
    #[must_use]
    pub fn set(key: &'static str, val: &str) -> Self {
        Self::default().and_set(key, val)
    }

    /// Unsets `key` until the guard drops.
    #[must_use]
    pub fn remove(key: &'static str) -> Self {
        Self::default().and_remove(key)
    }

    /// Also sets `key` to `val`.
    #[must_use]
    pub fn and_set(mut self, key: &'static str, val: &str) -> Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: callers serialize env access with `#[serial(env)]`.
        unsafe { std::env::set_var(key, val) };
        self
    }

    /// Also unsets `key`.
    #[must_use]
    pub fn and_remove(mut self, key: &'static str) -> Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: callers serialize env access with `#[serial(env)]`.
        unsafe { std::env::remove_var(key) };
        self
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // Undo in reverse so a key touched twice ends at its original value
        for (key, prev) in self.saved.drain(..).rev() {
            match prev {
                // SAFETY: see `and_set`.
                Some(v) => unsafe { std::env::set_var(key, v) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

/// API key used by test clients
pub const TEST_API_KEY: &str = "test-api-key";

/// Client pointed at a mock server, authenticated with [`TEST_API_KEY`]
#[must_use]
pub fn client_for(base_url: impl Into<String>) -> Client<ExaConfig> {
    Client::with_config(
        ExaConfig::new()
            .with_api_base(base_url)
            .with_api_key(TEST_API_KEY),
    )
}

/// JSON body of one list page
#[must_use]
pub fn list_page(data: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "data": data,
        "hasMore": next_cursor.is_some(),
        "nextCursor": next_cursor,
    })
}

/// Minimal webset JSON with the given status
#[must_use]
pub fn webset_json(id: &str, status: &str) -> Value {
    json!({
        "id": id,
        "object": "webset",
        "status": status,
        "searches": [],
        "imports": [],
        "enrichments": [],
        "monitors": [],
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z",
    })
}
