//! Client application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Auth state is shared app-wide through `AppContext`; list, detail, and
//! image-selection state is owned by the view that renders it.

pub mod auth;
pub mod blogs;
pub mod detail;
pub mod image;
pub mod session;
