use super::*;
use crate::net::backend::NO_ROWS_AFFECTED;
use crate::net::fake::{Call, FAKE_STORAGE_BASE, FakeBackend};
use futures::executor::block_on;
use serde_json::json;

fn comment_row(id: &str, post: &str, owner: &str, created_at: &str) -> serde_json::Value {
    json!({
        "id": id,
        "blog_id": post,
        "user_id": owner,
        "content": format!("comment {id}"),
        "image_url": null,
        "created_at": created_at
    })
}

#[test]
fn fetch_comments_scopes_to_post_newest_first() {
    let backend = FakeBackend::new()
        .with_row(COMMENTS_TABLE, comment_row("c1", "p1", "u1", "2025-01-01T00:00:01+00:00"))
        .with_row(COMMENTS_TABLE, comment_row("c2", "p2", "u1", "2025-01-01T00:00:02+00:00"))
        .with_row(COMMENTS_TABLE, comment_row("c3", "p1", "u2", "2025-01-01T00:00:03+00:00"));
    let comments = block_on(fetch_comments(&backend, "p1")).unwrap();
    let ids: Vec<&str> = comments.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c3", "c1"]);
}

#[test]
fn create_comment_requires_session() {
    let backend = FakeBackend::new();
    let err = block_on(create_comment(&backend, "p1", "hi", None)).unwrap_err();
    assert_eq!(err.to_string(), NOT_SIGNED_IN_COMMENT);
}

#[test]
fn create_comment_with_image_uploads_to_comment_bucket_first() {
    let backend = FakeBackend::new().signed_in_as("u9");
    let file = ImageFile { file_name: "x.gif".to_owned(), content_type: "image/gif".to_owned(), bytes: vec![7] };
    block_on(create_comment(&backend, "p1", "nice", Some(&file))).unwrap();

    let calls = backend.calls();
    let upload_at = calls.iter().position(|c| matches!(c, Call::Upload { .. })).unwrap();
    let insert_at = calls.iter().position(|c| matches!(c, Call::Insert { .. })).unwrap();
    assert!(upload_at < insert_at);

    let rows = backend.rows(COMMENTS_TABLE);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["blog_id"], "p1");
    assert_eq!(rows[0]["user_id"], "u9");
    assert_eq!(rows[0]["content"], "nice");
    let url = rows[0]["image_url"].as_str().unwrap();
    assert!(url.starts_with(&format!("{FAKE_STORAGE_BASE}/comment-images/u9/")));
    assert!(url.ends_with(".gif"));
}

#[test]
fn delete_comment_by_non_owner_is_rejected() {
    let backend = FakeBackend::new()
        .signed_in_as("u2")
        .with_row(COMMENTS_TABLE, comment_row("c1", "p1", "u1", "2025-01-01T00:00:01+00:00"));
    let err = block_on(delete_comment(&backend, "c1")).unwrap_err();
    assert_eq!(err.to_string(), NO_ROWS_AFFECTED);
    assert_eq!(backend.rows(COMMENTS_TABLE).len(), 1);
}

#[test]
fn delete_comment_by_owner_removes_row() {
    let backend = FakeBackend::new()
        .signed_in_as("u1")
        .with_row(COMMENTS_TABLE, comment_row("c1", "p1", "u1", "2025-01-01T00:00:01+00:00"));
    block_on(delete_comment(&backend, "c1")).unwrap();
    assert!(backend.rows(COMMENTS_TABLE).is_empty());
}
