//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome, forms, and per-row controls. They receive
//! the `AppContext` and their data as props; pages own the backend calls,
//! except `auth_form`, which drives the auth operations directly.

pub mod auth_form;
pub mod comment_item;
pub mod confirm_dialog;
pub mod image_picker;
pub mod nav_bar;
pub mod pager;
pub mod post_card;
pub mod post_editor;
pub mod protected_route;
