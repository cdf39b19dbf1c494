//! Blog post queries and mutations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the list, detail, create, and edit pages. Listing is offset-based
//! over `created_at desc, id desc`; inserts or deletes between page loads
//! shift later pages and that drift is not corrected.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use super::backend::{
    ActionError, Backend, BackendError, Filter, Select, TableApi, decode_rows, decode_single, session_user_id,
};
use super::images::upload_image;
use super::types::{ImageFile, NewPost, Post, PostDraft, PostPatch};
use crate::config::{POST_IMAGES_BUCKET, POSTS_TABLE};
use crate::util::form::PostForm;

pub const LIST_COLUMNS: &str = "id,user_id,title,content,created_at,image_url";
pub const DRAFT_COLUMNS: &str = "title,content,image_url";

pub const NOT_SIGNED_IN_CREATE: &str = "You must be logged in to create a blog.";
pub const NOT_SIGNED_IN_EDIT: &str = "You must be logged in to edit a blog.";

/// Inclusive zero-based row range for a 1-based page. Page 0 is treated as 1.
pub fn page_range(page: u32, size: u32) -> (u32, u32) {
    let from = page.max(1).saturating_sub(1).saturating_mul(size);
    let to = from.saturating_add(size).saturating_sub(1);
    (from, to)
}

/// The listing query for one page.
pub fn page_query(page: u32, size: u32) -> Select {
    let (from, to) = page_range(page, size);
    Select::from(POSTS_TABLE)
        .columns(LIST_COLUMNS)
        .order("created_at", false, Some(false))
        .order("id", false, None)
        .range(from, to)
}

/// Fetch one page of posts, newest first.
///
/// # Errors
///
/// Returns the backend error when the query fails or rows do not decode.
pub async fn fetch_page<B>(backend: &B, page: u32, size: u32) -> Result<Vec<Post>, BackendError>
where
    B: TableApi + ?Sized,
{
    let rows = backend.select(&page_query(page, size)).await?;
    decode_rows(rows)
}

/// Fetch one post by id.
///
/// # Errors
///
/// Returns the backend error when the post does not exist or the query fails.
pub async fn fetch_post<B>(backend: &B, id: &str) -> Result<Post, BackendError>
where
    B: TableApi + ?Sized,
{
    let query = Select::from(POSTS_TABLE).columns(LIST_COLUMNS).eq("id", id).single();
    decode_single(backend.select(&query).await?)
}

/// Fetch the editable fields of a post.
///
/// # Errors
///
/// Returns the backend error when the post does not exist or the query fails.
pub async fn fetch_draft<B>(backend: &B, id: &str) -> Result<PostDraft, BackendError>
where
    B: TableApi + ?Sized,
{
    let query = Select::from(POSTS_TABLE).columns(DRAFT_COLUMNS).eq("id", id).single();
    decode_single(backend.select(&query).await?)
}

/// Create a post owned by the session user, uploading `image` first.
///
/// # Errors
///
/// Returns [`ActionError::Precondition`] without a session, otherwise the
/// first failing backend call.
pub async fn create_post<B>(backend: &B, form: &PostForm, image: Option<&ImageFile>) -> Result<(), ActionError>
where
    B: Backend + ?Sized,
{
    let user_id = session_user_id(backend, NOT_SIGNED_IN_CREATE).await?;
    let image_url = match image {
        Some(file) => Some(upload_image(backend, POST_IMAGES_BUCKET, &user_id, file).await?),
        None => None,
    };
    let row = NewPost { user_id, title: form.title.clone(), content: form.content.clone(), image_url };
    let rows = serde_json::to_value([row]).map_err(|e| BackendError::Decode(e.to_string()))?;
    backend.insert(POSTS_TABLE, rows).await?;
    Ok(())
}

/// Update a post. Without a replacement image `existing_image_url` is written
/// back unchanged; with one, the new upload's URL replaces it and the old
/// object is left in storage.
///
/// # Errors
///
/// Returns [`ActionError::Precondition`] without a session, otherwise the
/// first failing backend call (including a write the backend refuses).
pub async fn update_post<B>(
    backend: &B,
    id: &str,
    form: &PostForm,
    existing_image_url: Option<String>,
    image: Option<&ImageFile>,
) -> Result<(), ActionError>
where
    B: Backend + ?Sized,
{
    let user_id = session_user_id(backend, NOT_SIGNED_IN_EDIT).await?;
    let image_url = match image {
        Some(file) => Some(upload_image(backend, POST_IMAGES_BUCKET, &user_id, file).await?),
        None => existing_image_url,
    };
    let patch = PostPatch { title: form.title.clone(), content: form.content.clone(), image_url };
    let patch = serde_json::to_value(patch).map_err(|e| BackendError::Decode(e.to_string()))?;
    backend
        .update(POSTS_TABLE, &[Filter::eq("id", id)], patch)
        .await?;
    Ok(())
}

/// Delete a post by id.
///
/// # Errors
///
/// Returns the backend error, including the rejection of a post the caller
/// does not own.
pub async fn delete_post<B>(backend: &B, id: &str) -> Result<(), BackendError>
where
    B: TableApi + ?Sized,
{
    backend
        .delete(POSTS_TABLE, &[Filter::eq("id", id)])
        .await
}
