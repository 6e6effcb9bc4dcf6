//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use sha2::{Digest, Sha512};

use crate::session::SessionStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The key to be used for signing and encrypting private cookies.
    pub cookie_key: Key,

    /// The expense stores of all active sessions.
    pub sessions: SessionStore,
}

impl AppState {
    /// Create a new [AppState] with no active sessions.
    pub fn new(cookie_secret: &str) -> Self {
        Self {
            cookie_key: create_cookie_key(cookie_secret),
            sessions: SessionStore::new(),
        }
    }
}

// this impl tells `PrivateCookieJar` how to access the key from our state
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Create a signing key for cookies from a `secret`s string.
pub fn create_cookie_key(secret: &str) -> Key {
    let hash = Sha512::digest(secret);

    Key::from(&hash)
}
