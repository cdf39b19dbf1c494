//! Paginated blog-list state.
//!
//! DESIGN
//! ======
//! Pager availability is derived from the last fetched page rather than a
//! total count: a full page means there may be more, a short page means
//! there are none.

#[cfg(test)]
#[path = "blogs_test.rs"]
mod blogs_test;

use crate::net::types::Post;

/// State behind the `/blogs` list view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogsState {
    /// One-based page number.
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<Post>,
    pub loading: bool,
    pub error: Option<String>,
    /// Id of the post whose delete is in flight.
    pub deleting: Option<String>,
}

impl BlogsState {
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self { page: 1, page_size, items: Vec::new(), loading: false, error: None, deleting: None }
    }

    #[must_use]
    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.page_size > 0 && self.items.len() == self.page_size as usize
    }

    /// Move to the previous page; a no-op on page 1.
    pub fn prev(&mut self) {
        if self.can_go_prev() {
            self.page -= 1;
        }
    }

    pub fn next(&mut self) {
        if self.can_go_next() {
            self.page += 1;
        }
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, result: Result<Vec<Post>, String>) {
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            Err(message) => self.error = Some(message),
        }
    }

    #[must_use]
    pub fn is_deleting(&self, id: &str) -> bool {
        self.deleting.as_deref() == Some(id)
    }
}
