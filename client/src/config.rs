//! Backend configuration baked in at build time.
//!
//! `SUPABASE_URL` and `SUPABASE_ANON_KEY` are read with `option_env!` when the
//! WASM bundle is compiled; the anon key is public by design of the hosted
//! backend, row access is governed by its own policies.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SUPABASE_URL: &str = "http://127.0.0.1:54321";
pub const PAGE_SIZE: u32 = 5;
pub const POSTS_TABLE: &str = "blogs";
pub const COMMENTS_TABLE: &str = "comments";
pub const POST_IMAGES_BUCKET: &str = "blog-images";
pub const COMMENT_IMAGES_BUCKET: &str = "comment-images";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    pub page_size: u32,
}

impl BackendConfig {
    /// Build from values captured at compile time.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    /// Build from optional raw values, applying defaults and normalization.
    #[must_use]
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Self {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_SUPABASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let anon_key = anon_key.map(str::trim).unwrap_or_default().to_owned();
        Self { url, anon_key, page_size: PAGE_SIZE }
    }

    /// Project reference used to namespace the persisted session key.
    ///
    /// `https://abcd.supabase.co` -> `abcd`; `http://127.0.0.1:54321` -> `127`.
    #[must_use]
    pub fn project_ref(&self) -> &str {
        let host = self
            .url
            .split_once("://")
            .map_or(self.url.as_str(), |(_, rest)| rest);
        let host = host.split(['/', ':']).next().unwrap_or(host);
        host.split('.').next().unwrap_or(host)
    }

    /// `localStorage` key holding the serialized session.
    #[must_use]
    pub fn session_storage_key(&self) -> String {
        format!("sb-{}-auth-token", self.project_ref())
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}
