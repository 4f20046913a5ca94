//! Authenticated session and its two-key persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser persists the session in `localStorage` and the CLI in a JSON
//! file; both are reached through [`KeyValueStore`]. No token means guest mode.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::types::LoginResponse;

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";

/// Role string that unlocks the inventory controls.
pub const ADMIN_ROLE: &str = "admin";

/// String key/value storage the session is persisted in.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    /// Remove every key, not only the session ones.
    fn clear(&self);
}

/// A signed-in user: bearer token plus role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: String,
}

impl Session {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Role as shown in the header, e.g. `ADMIN`.
    #[must_use]
    pub fn role_label(&self) -> String {
        self.role.to_uppercase()
    }
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self { token: resp.token, role: resp.role }
    }
}

/// Read the persisted session, if a token is stored.
pub fn load(store: &impl KeyValueStore) -> Option<Session> {
    let token = store.get(TOKEN_KEY).filter(|t| !t.is_empty())?;
    let role = store.get(ROLE_KEY).unwrap_or_default();
    Some(Session { token, role })
}

pub fn persist(store: &impl KeyValueStore, session: &Session) {
    store.set(TOKEN_KEY, &session.token);
    store.set(ROLE_KEY, &session.role);
}

/// Wipe the store wholesale.
pub fn clear(store: &impl KeyValueStore) {
    store.clear();
}

/// `true` when `session` is present and carries the admin role.
#[must_use]
pub fn is_admin(session: Option<&Session>) -> bool {
    session.is_some_and(Session::is_admin)
}
