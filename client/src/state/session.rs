//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the header, sidebar and product cards to decide which affordances
//! to show. Persistence lives in `util::storage`; this is the in-memory copy.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use storefront::Session;

/// Authentication state: the signed-in session, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub current: Option<Session>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Admin controls are shown only for the exact admin role.
    pub fn is_admin(&self) -> bool {
        storefront::session::is_admin(self.current.as_ref())
    }

    /// Upper-cased role for the header, empty for guests.
    pub fn role_label(&self) -> String {
        self.current.as_ref().map(Session::role_label).unwrap_or_default()
    }

    /// Replace the in-memory session with whatever storage held.
    pub fn restore(&mut self, stored: Option<Session>) {
        self.current = stored;
    }

    pub fn sign_in(&mut self, session: Session) {
        self.current = Some(session);
    }

    pub fn sign_out(&mut self) {
        self.current = None;
    }
}
