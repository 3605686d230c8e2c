//! Persisted bearer token (browser local storage).

use gloo::storage::{LocalStorage, Storage};

const TOKEN_KEY: &str = "token";

/// Token from the previous session, if any. An empty value counts as absent.
pub fn token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_KEY)
        .ok()
        .filter(|t| !t.is_empty())
}

pub fn store_token(token: &str) {
    if let Err(e) = LocalStorage::set(TOKEN_KEY, token) {
        log::error!("failed to persist token: {e:?}");
    }
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}
