//! Form input validation shared by auth, post, and comment forms.
//!
//! Required fields are checked before any backend call so an empty submit
//! never produces a remote error.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

pub const MISSING_CREDENTIALS: &str = "Enter both email and password.";
pub const MISSING_POST_FIELDS: &str = "Title and content are required.";
pub const EMPTY_COMMENT: &str = "Comment cannot be empty.";

/// Validated post fields, kept as typed by the author.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
}

/// Trim the email and require both fields. The password is kept verbatim.
///
/// # Errors
///
/// Returns [`MISSING_CREDENTIALS`] when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Require a non-blank title and content.
///
/// # Errors
///
/// Returns [`MISSING_POST_FIELDS`] when either field is blank.
pub fn validate_post(title: &str, content: &str) -> Result<PostForm, &'static str> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(MISSING_POST_FIELDS);
    }
    Ok(PostForm { title: title.to_owned(), content: content.to_owned() })
}

/// Require a non-blank comment and return it trimmed.
///
/// # Errors
///
/// Returns [`EMPTY_COMMENT`] when the comment is blank.
pub fn validate_comment(content: &str) -> Result<String, &'static str> {
    let content = content.trim();
    if content.is_empty() {
        return Err(EMPTY_COMMENT);
    }
    Ok(content.to_owned())
}
