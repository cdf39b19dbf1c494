//! Comment queries and mutations scoped to a parent post.

#[cfg(test)]
#[path = "comments_test.rs"]
mod comments_test;

use super::backend::{
    ActionError, Backend, BackendError, Filter, Select, TableApi, decode_rows, session_user_id,
};
use super::images::upload_image;
use super::types::{Comment, ImageFile, NewComment};
use crate::config::{COMMENT_IMAGES_BUCKET, COMMENTS_TABLE};

pub const COMMENT_COLUMNS: &str = "id,blog_id,user_id,content,image_url,created_at";
pub const NOT_SIGNED_IN_COMMENT: &str = "You must be logged in to comment.";

/// Comments on `post_id`, newest first.
///
/// # Errors
///
/// Returns the backend error when the query fails or rows do not decode.
pub async fn fetch_comments<B>(backend: &B, post_id: &str) -> Result<Vec<Comment>, BackendError>
where
    B: TableApi + ?Sized,
{
    let query = Select::from(COMMENTS_TABLE)
        .columns(COMMENT_COLUMNS)
        .eq("blog_id", post_id)
        .order("created_at", false, Some(false));
    decode_rows(backend.select(&query).await?)
}

/// Add a comment (already validated and trimmed) to `post_id`.
///
/// # Errors
///
/// Returns [`ActionError::Precondition`] without a session, otherwise the
/// first failing backend call.
pub async fn create_comment<B>(
    backend: &B,
    post_id: &str,
    content: &str,
    image: Option<&ImageFile>,
) -> Result<(), ActionError>
where
    B: Backend + ?Sized,
{
    let user_id = session_user_id(backend, NOT_SIGNED_IN_COMMENT).await?;
    let image_url = match image {
        Some(file) => Some(upload_image(backend, COMMENT_IMAGES_BUCKET, &user_id, file).await?),
        None => None,
    };
    let row = NewComment { blog_id: post_id.to_owned(), user_id, content: content.to_owned(), image_url };
    let rows = serde_json::to_value([row]).map_err(|e| BackendError::Decode(e.to_string()))?;
    backend.insert(COMMENTS_TABLE, rows).await?;
    Ok(())
}

/// Delete a comment by id.
///
/// # Errors
///
/// Returns the backend error, including the rejection of a comment the caller
/// does not own.
pub async fn delete_comment<B>(backend: &B, id: &str) -> Result<(), BackendError>
where
    B: TableApi + ?Sized,
{
    backend.delete(COMMENTS_TABLE, &[Filter::eq("id", id)]).await
}
