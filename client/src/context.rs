//! Session context handed to every page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once in `App` and passed to pages and components as a prop. It
//! carries the injected backend and the shared auth signal; both handles are
//! `Copy` so route closures can capture the context freely.
//!
//! The auth signal starts in the restoring state. Both the server render and
//! the first hydrate pass then show protected routes as pending, and nothing
//! redirects before `init_session` has answered.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::backend::Backend;
use crate::state::auth::AuthState;

#[derive(Clone, Copy)]
pub struct AppContext {
    backend: StoredValue<Arc<dyn Backend>>,
    pub auth: RwSignal<AuthState>,
    pub page_size: u32,
}

impl AppContext {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>, page_size: u32) -> Self {
        Self {
            backend: StoredValue::new(backend),
            auth: RwSignal::new(AuthState::restoring()),
            page_size,
        }
    }

    /// Shared handle to the backend for one async operation.
    #[must_use]
    pub fn backend(&self) -> Arc<dyn Backend> {
        self.backend.get_value()
    }
}
