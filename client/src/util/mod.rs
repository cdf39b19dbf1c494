//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and formatting logic lives here so pages and components stay
//! thin and the rules are testable without rendering.

pub mod form;
pub mod format;
pub mod guard;
pub mod owner;
