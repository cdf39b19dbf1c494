//! Row and identity DTOs exchanged with the hosted backend.
//!
//! DESIGN
//! ======
//! Field names mirror the remote table columns (`user_id`, `blog_id`,
//! `image_url`) so rows deserialize straight from PostgREST JSON without a
//! mapping layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Identity record owned by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Bearer session issued by the auth service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Expiry as unix seconds, when the service reports one.
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

/// A blog post row from the `blogs` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Insert payload for a new post. `id` and `created_at` are assigned remotely.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewPost {
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// Update payload for an existing post.
///
/// `image_url` is always written: editing without a replacement image sends
/// the previously stored value back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PostPatch {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// The subset of a post loaded into the edit form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PostDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A comment row from the `comments` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub blog_id: String,
    pub user_id: String,
    pub content: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Insert payload for a new comment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub blog_id: String,
    pub user_id: String,
    pub content: String,
    pub image_url: Option<String>,
}

/// An image picked in a form, read fully into memory before upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    /// Content type sent to blob storage; browsers report an empty type for
    /// unknown files.
    #[must_use]
    pub fn content_type_or_default(&self) -> &str {
        if self.content_type.trim().is_empty() {
            "application/octet-stream"
        } else {
            &self.content_type
        }
    }
}
