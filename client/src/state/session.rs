//! Auth operations: register, login, logout, and session restore.
//!
//! SYSTEM CONTEXT
//! ==============
//! These are the only writers of [`AuthState`]. Pages call them from
//! `spawn_local` with the signal from `AppContext`; tests call them with a
//! `RefCell` and the in-memory backend.
//!
//! ERROR HANDLING
//! ==============
//! Register/login store the backend message verbatim in `AuthState::error`.
//! Logout and session restore never surface errors: a failed sign-out still
//! clears the local user and a failed lookup counts as "no session".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::auth::{AuthState, AuthStore};
use crate::net::backend::IdentityApi;

/// Create an account and cache the returned identity.
///
/// Whether a session is issued immediately depends on the service's
/// email-confirmation setting; the cached user is set either way.
pub async fn register<B, S>(backend: &B, store: &S, email: &str, password: &str)
where
    B: IdentityApi + ?Sized,
    S: AuthStore,
{
    store.apply(AuthState::begin_credentials);
    match backend.sign_up(email, password).await {
        Ok(user) => {
            log::info!("auth: registered user={}", user.id);
            store.apply(|s| s.succeed(Some(user)));
        }
        Err(e) => {
            log::warn!("auth: register failed: {e}");
            store.apply(|s| s.fail(e.to_string()));
        }
    }
}

/// Sign in with email and password.
pub async fn login<B, S>(backend: &B, store: &S, email: &str, password: &str)
where
    B: IdentityApi + ?Sized,
    S: AuthStore,
{
    store.apply(AuthState::begin_credentials);
    match backend.sign_in_with_password(email, password).await {
        Ok(user) => {
            log::info!("auth: signed in user={}", user.id);
            store.apply(|s| s.succeed(Some(user)));
        }
        Err(e) => {
            log::warn!("auth: login failed: {e}");
            store.apply(|s| s.fail(e.to_string()));
        }
    }
}

/// Sign out remotely, then clear the cached user regardless of the outcome.
pub async fn logout<B, S>(backend: &B, store: &S)
where
    B: IdentityApi + ?Sized,
    S: AuthStore,
{
    if let Err(e) = backend.sign_out().await {
        log::warn!("auth: sign-out failed, clearing local user anyway: {e}");
    }
    store.apply(AuthState::sign_out);
}

/// Populate the cached user from the backend's stored session.
pub async fn init_session<B, S>(backend: &B, store: &S)
where
    B: IdentityApi + ?Sized,
    S: AuthStore,
{
    store.apply(AuthState::begin_restore);
    let user = match backend.get_session().await {
        Ok(session) => session.map(|s| s.user),
        Err(e) => {
            log::warn!("auth: session lookup failed: {e}");
            None
        }
    };
    log::debug!("auth: session restored signed_in={}", user.is_some());
    store.apply(|s| s.succeed(user));
}
