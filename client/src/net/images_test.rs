use super::*;
use crate::net::fake::{Call, FAKE_STORAGE_BASE, FakeBackend};
use futures::executor::block_on;

fn image(name: &str) -> ImageFile {
    ImageFile { file_name: name.to_owned(), content_type: "image/png".to_owned(), bytes: vec![0x89, 0x50] }
}

#[test]
fn file_ext_lowercases_last_segment() {
    assert_eq!(file_ext("Photo.JPG"), "jpg");
    assert_eq!(file_ext("archive.tar.gz"), "gz");
}

#[test]
fn file_ext_defaults_to_png() {
    assert_eq!(file_ext("README"), "png");
    assert_eq!(file_ext("trailing."), "png");
}

#[test]
fn image_path_is_prefixed_by_user_and_random() {
    let a = image_path("user-1", "cat.webp");
    let b = image_path("user-1", "cat.webp");
    assert!(a.starts_with("user-1/"));
    assert!(a.ends_with(".webp"));
    assert_ne!(a, b);
    let stem = a.trim_start_matches("user-1/").trim_end_matches(".webp");
    assert!(uuid::Uuid::parse_str(stem).is_ok());
}

#[test]
fn upload_image_returns_public_url_of_uploaded_path() {
    let backend = FakeBackend::new();
    let url = block_on(upload_image(&backend, "blog-images", "u1", &image("a.png"))).unwrap();

    let calls = backend.calls();
    let Some(Call::Upload { bucket, path }) = calls.first() else {
        panic!("expected an upload call, got {calls:?}");
    };
    assert_eq!(bucket, "blog-images");
    assert_eq!(url, format!("{FAKE_STORAGE_BASE}/blog-images/{path}"));
    assert!(backend.has_blob("blog-images", path));
}

#[test]
fn upload_image_surfaces_storage_error() {
    let backend = FakeBackend::new();
    backend.fail("upload", "The object exceeded the maximum allowed size");
    let err = block_on(upload_image(&backend, "blog-images", "u1", &image("a.png"))).unwrap_err();
    assert_eq!(err.to_string(), "The object exceeded the maximum allowed size");
}
