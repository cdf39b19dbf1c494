//! Image uploads for posts and comments.
//!
//! Objects are stored under `<user_id>/<random uuid>.<ext>` so every user
//! writes inside their own prefix and names never collide. The upload always
//! precedes the row write that references it; when that row write fails the
//! blob stays behind unreferenced.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use super::backend::{BackendError, BlobApi};
use super::types::ImageFile;

/// Lower-cased extension of `file_name`, `png` when there is none.
pub fn file_ext(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => "png".to_owned(),
    }
}

/// Storage path for a new image owned by `user_id`.
pub fn image_path(user_id: &str, file_name: &str) -> String {
    format!("{user_id}/{}.{}", uuid::Uuid::new_v4(), file_ext(file_name))
}

/// Upload `file` into `bucket` under the user's prefix and return its public URL.
///
/// # Errors
///
/// Returns the backend error when the upload is rejected.
pub async fn upload_image<B>(backend: &B, bucket: &str, user_id: &str, file: &ImageFile) -> Result<String, BackendError>
where
    B: BlobApi + ?Sized,
{
    let path = image_path(user_id, &file.file_name);
    backend.upload(bucket, &path, file).await?;
    log::info!("uploaded image to {bucket}/{path}");
    Ok(backend.public_url(bucket, &path))
}
