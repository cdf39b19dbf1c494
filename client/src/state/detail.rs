//! Post-detail state: the post, its comments, and the page's error line.
//!
//! DESIGN
//! ======
//! Every load takes a request number. Only the newest request may write
//! back, so a slow response for a post the user already left, or for a
//! superseded reload, is dropped. Moving to a different post resets the view
//! to loading; reloading the same post keeps it on screen until the fresh
//! rows arrive.

#[cfg(test)]
#[path = "detail_test.rs"]
mod detail_test;

use crate::net::types::{Comment, Post};

/// Load outcome for the post itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Detail {
    Loading,
    Missing,
    Loaded(Post),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailState {
    pub post_id: String,
    pub detail: Detail,
    pub comments: Vec<Comment>,
    pub error: Option<String>,
    request: u64,
}

impl Default for DetailState {
    fn default() -> Self {
        Self { post_id: String::new(), detail: Detail::Loading, comments: Vec::new(), error: None, request: 0 }
    }
}

impl DetailState {
    /// Start loading `post_id`. Returns the request number the response must
    /// present to [`DetailState::loaded`].
    pub fn begin_load(&mut self, post_id: &str) -> u64 {
        self.request = self.request.wrapping_add(1);
        if self.post_id != post_id {
            post_id.clone_into(&mut self.post_id);
            self.detail = Detail::Loading;
            self.comments.clear();
            self.error = None;
        }
        self.request
    }

    /// Apply a finished load. A post error shows the not-found view; a
    /// comment error keeps the post and reports the message. Returns `false`
    /// for a stale response.
    pub fn loaded(&mut self, request: u64, post: Result<Post, String>, comments: Result<Vec<Comment>, String>) -> bool {
        if request != self.request {
            return false;
        }
        match post {
            Ok(post) => {
                match comments {
                    Ok(rows) => self.comments = rows,
                    Err(message) => self.error = Some(message),
                }
                self.detail = Detail::Loaded(post);
            }
            Err(_) => {
                self.detail = Detail::Missing;
                self.comments.clear();
            }
        }
        true
    }
}
