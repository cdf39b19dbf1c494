//! Display formatting for post cards and comments.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub const EXCERPT_CHARS: usize = 220;

/// First [`EXCERPT_CHARS`] characters of `content`, with `…` when cut.
#[must_use]
pub fn excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}…", &content[..cut]),
        None => content.to_owned(),
    }
}

/// Date part of an RFC 3339 timestamp (`2025-03-04T10:00:00+00:00` ->
/// `2025-03-04`). Missing timestamps render empty; anything unparseable is
/// shown as-is.
#[must_use]
pub fn format_date(created_at: Option<&str>) -> String {
    let Some(raw) = created_at.map(str::trim).filter(|s| !s.is_empty()) else {
        return String::new();
    };
    match raw.split_once(['T', ' ']) {
        Some((date, _)) if is_iso_date(date) => date.to_owned(),
        _ => raw.to_owned(),
    }
}

fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes.iter().enumerate().all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}
