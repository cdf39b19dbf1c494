//! Networking modules for the hosted backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` defines the injected capability traits, `supabase` implements
//! them over HTTP, and `posts`/`comments`/`images` are the typed operations
//! pages call. `types` holds the row and identity schema.

pub mod backend;
pub mod comments;
#[cfg(test)]
pub(crate) mod fake;
pub mod images;
pub mod posts;
pub mod supabase;
pub mod types;
