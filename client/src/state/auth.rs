//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard, the nav bar, and owner-gated controls. Written
//! only by the four operations in `state::session`, each of which goes
//! through the transition methods below.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::cell::RefCell;

use leptos::prelude::*;

use crate::net::types::AuthUser;

/// Coarse auth phase derived from [`AuthState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Cached identity plus the status of the last auth operation.
///
/// `user` is a possibly stale copy of the backend's identity; the backend
/// session remains authoritative for every write.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// State before the stored session has been looked up.
    #[must_use]
    pub fn restoring() -> Self {
        Self { loading: true, ..Self::default() }
    }

    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        match (&self.user, self.loading) {
            (_, true) => AuthPhase::Authenticating,
            (Some(_), false) => AuthPhase::Authenticated,
            (None, false) => AuthPhase::Anonymous,
        }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    /// Register/login started.
    pub fn begin_credentials(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Session lookup started. An earlier error stays visible.
    pub fn begin_restore(&mut self) {
        self.loading = true;
    }

    pub fn succeed(&mut self, user: Option<AuthUser>) {
        self.loading = false;
        self.user = user;
    }

    /// The user is left as it was; a failed login never signs anyone in.
    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn sign_out(&mut self) {
        self.user = None;
    }
}

/// Write target for auth operations.
///
/// The app writes through the `RwSignal` held in the session context; tests
/// use a plain `RefCell`.
pub trait AuthStore {
    fn apply(&self, f: impl FnOnce(&mut AuthState));
    fn snapshot(&self) -> AuthState;
}

impl AuthStore for RwSignal<AuthState> {
    fn apply(&self, f: impl FnOnce(&mut AuthState)) {
        self.update(f);
    }

    fn snapshot(&self) -> AuthState {
        self.get_untracked()
    }
}

impl AuthStore for RefCell<AuthState> {
    fn apply(&self, f: impl FnOnce(&mut AuthState)) {
        f(&mut self.borrow_mut());
    }

    fn snapshot(&self) -> AuthState {
        self.borrow().clone()
    }
}
