//! Route-guard decision for protected views.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";

/// What a protected route should do for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restore in progress; show a placeholder.
    Pending,
    /// No user; send the visitor to the login page.
    Redirect,
    /// Mount the protected view.
    Render,
}

#[must_use]
pub fn guard_decision(state: &AuthState) -> GuardDecision {
    match (&state.user, state.loading) {
        (Some(_), _) => GuardDecision::Render,
        (None, true) => GuardDecision::Pending,
        (None, false) => GuardDecision::Redirect,
    }
}
