use super::*;

const BASE: &str = "https://abcd.supabase.co";

#[test]
fn endpoints_follow_service_layout() {
    assert_eq!(auth_endpoint(BASE, "signup"), "https://abcd.supabase.co/auth/v1/signup");
    assert_eq!(rest_endpoint(BASE, "blogs"), "https://abcd.supabase.co/rest/v1/blogs");
    assert_eq!(
        object_endpoint(BASE, "blog-images", "u1/x.png"),
        "https://abcd.supabase.co/storage/v1/object/blog-images/u1/x.png"
    );
}

#[test]
fn public_url_uses_public_object_path() {
    let client = SupabaseClient::new(BackendConfig::from_values(Some(BASE), Some("anon")));
    assert_eq!(
        client.public_url("comment-images", "/u1/y.jpg"),
        "https://abcd.supabase.co/storage/v1/object/public/comment-images/u1/y.jpg"
    );
}

#[test]
fn filter_params_render_eq_operators() {
    let filters = vec![Filter::eq("id", "p-1")];
    assert_eq!(filter_params(&filters), vec![("id".to_owned(), "eq.p-1".to_owned())]);
}

#[test]
fn error_message_prefers_msg_then_message() {
    assert_eq!(
        error_message(400, r#"{"code":400,"error_code":"invalid_credentials","msg":"Invalid login credentials"}"#),
        "Invalid login credentials"
    );
    assert_eq!(
        error_message(409, r#"{"statusCode":"409","error":"Duplicate","message":"The resource already exists"}"#),
        "The resource already exists"
    );
    assert_eq!(
        error_message(400, r#"{"error":"invalid_grant","error_description":"Invalid Refresh Token"}"#),
        "Invalid Refresh Token"
    );
}

#[test]
fn error_message_falls_back_to_status() {
    assert_eq!(error_message(502, "<html>bad gateway</html>"), "request failed: 502");
    assert_eq!(error_message(500, r#"{"message":"   "}"#), "request failed: 500");
}

#[test]
fn session_expiry_applies_margin() {
    assert!(!is_session_expired(None, 1_000));
    assert!(!is_session_expired(Some(1_100), 1_000));
    assert!(is_session_expired(Some(1_005), 1_000));
    assert!(is_session_expired(Some(900), 1_000));
}

#[test]
fn parse_session_derives_expiry_from_expires_in() {
    let value = serde_json::json!({
        "access_token": "at",
        "refresh_token": "rt",
        "expires_in": 3600,
        "user": { "id": "u1", "email": "a@b.com" }
    });
    let session = parse_session(value, 1_000).unwrap();
    assert_eq!(session.expires_at, Some(4_600));
    assert_eq!(session.user.id, "u1");
}

#[test]
fn parse_sign_up_accepts_session_body() {
    let value = serde_json::json!({
        "access_token": "at",
        "expires_at": 5_000,
        "user": { "id": "u1", "email": "a@b.com" }
    });
    let (user, session) = parse_sign_up(value, 0).unwrap();
    assert_eq!(user.id, "u1");
    assert!(session.is_some());
}

#[test]
fn parse_sign_up_accepts_bare_user_body() {
    let value = serde_json::json!({ "id": "u2", "email": "c@d.com", "confirmation_sent_at": "2025-01-01" });
    let (user, session) = parse_sign_up(value, 0).unwrap();
    assert_eq!(user, AuthUser { id: "u2".to_owned(), email: Some("c@d.com".to_owned()) });
    assert!(session.is_none());
}

#[test]
fn parse_sign_up_accepts_wrapped_user_body() {
    let value = serde_json::json!({ "user": { "id": "u3" }, "session": null });
    let (user, session) = parse_sign_up(value, 0).unwrap();
    assert_eq!(user.id, "u3");
    assert_eq!(user.email, None);
    assert!(session.is_none());
}

#[test]
fn rows_from_body_normalizes_shapes() {
    assert!(rows_from_body(Value::Null).is_empty());
    assert_eq!(rows_from_body(serde_json::json!({ "id": 1 })).len(), 1);
    assert_eq!(rows_from_body(serde_json::json!([{ "id": 1 }, { "id": 2 }])).len(), 2);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_are_unavailable() {
    let client = SupabaseClient::new(BackendConfig::default());
    let result = futures::executor::block_on(client.select(&Select::from("blogs")));
    assert_eq!(result, Err(BackendError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_session_is_empty() {
    let client = SupabaseClient::new(BackendConfig::default());
    let session = futures::executor::block_on(client.get_session()).unwrap();
    assert_eq!(session, None);
}
