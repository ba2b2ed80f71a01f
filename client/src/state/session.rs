//! Login-flag state for the admin gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flag is mirrored into a durable browser slot so it survives reloads.
//! Route guards read `restored` to avoid redirecting before that slot has
//! been read on startup.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::KeyValueStore;

/// Durable key holding `"true"` while logged in.
pub const SESSION_KEY: &str = "isLoggedIn";

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "1234";

/// Message surfaced when the credential check fails.
pub const ACCESS_DENIED_MESSAGE: &str = "❌ Access Denied: Incorrect credentials";

/// In-memory session state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub logged_in: bool,
    /// `true` once the durable slot has been read.
    pub restored: bool,
}

impl SessionState {
    /// Build the startup state from the durable slot.
    pub fn restore(storage: &impl KeyValueStore) -> Self {
        let logged_in = storage.get(SESSION_KEY).is_some_and(|v| v == "true");
        Self { logged_in, restored: true }
    }

    /// Check the credentials and, on success, persist the flag.
    ///
    /// A failed attempt leaves the state untouched.
    pub fn login(&mut self, storage: &impl KeyValueStore, username: &str, password: &str) -> bool {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            return false;
        }
        self.logged_in = true;
        storage.set(SESSION_KEY, "true");
        true
    }

    pub fn logout(&mut self, storage: &impl KeyValueStore) {
        self.logged_in = false;
        storage.remove(SESSION_KEY);
    }
}
