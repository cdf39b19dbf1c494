//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, saving, confirming)
//! and delegates rendering details to `components`. Every page receives the
//! `AppContext` as a prop.

pub mod blogs;
pub mod create_blog;
pub mod edit_blog;
pub mod home;
pub mod login;
pub mod logout;
pub mod not_found;
pub mod register;
pub mod view_blog;
