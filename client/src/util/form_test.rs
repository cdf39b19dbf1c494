use super::*;

#[test]
fn validate_credentials_trims_email_only() {
    assert_eq!(
        validate_credentials("  a@b.com ", " secret "),
        Ok(("a@b.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_both_fields() {
    assert_eq!(validate_credentials("   ", "pw"), Err(MISSING_CREDENTIALS));
    assert_eq!(validate_credentials("a@b.com", ""), Err(MISSING_CREDENTIALS));
}

#[test]
fn validate_post_keeps_fields_as_typed() {
    assert_eq!(
        validate_post("Title ", "Body\n"),
        Ok(PostForm { title: "Title ".to_owned(), content: "Body\n".to_owned() })
    );
}

#[test]
fn validate_post_rejects_blank_fields() {
    assert_eq!(validate_post("", "body"), Err(MISSING_POST_FIELDS));
    assert_eq!(validate_post("title", "  \n "), Err(MISSING_POST_FIELDS));
}

#[test]
fn validate_comment_trims() {
    assert_eq!(validate_comment("  nice post \n"), Ok("nice post".to_owned()));
    assert_eq!(validate_comment(" \t "), Err(EMPTY_COMMENT));
}
