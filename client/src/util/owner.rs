//! Ownership checks for edit/delete controls.
//!
//! These only decide what to render. The backend's row policies are the
//! real authority, so a stale or forged check can at worst show a control
//! whose action the backend then rejects.

#[cfg(test)]
#[path = "owner_test.rs"]
mod owner_test;

use crate::state::auth::AuthState;

/// True when the cached user owns a row with `owner_id`.
#[must_use]
pub fn is_owner(state: &AuthState, owner_id: &str) -> bool {
    state.user_id().is_some_and(|id| id == owner_id)
}

/// Mutation controls to show for one row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowActions {
    pub edit: bool,
    pub delete: bool,
}

/// Controls for a post card: owners may edit and delete.
#[must_use]
pub fn post_actions(state: &AuthState, owner_id: &str) -> RowActions {
    let owned = is_owner(state, owner_id);
    RowActions { edit: owned, delete: owned }
}

/// Controls for a comment: owners may delete; comments are never edited.
#[must_use]
pub fn comment_actions(state: &AuthState, owner_id: &str) -> RowActions {
    RowActions { edit: false, delete: is_owner(state, owner_id) }
}
