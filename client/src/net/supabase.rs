//! HTTP implementation of the backend capabilities against a Supabase project.
//!
//! Client-side (hydrate): real calls via `gloo-net`, session persisted in
//! `localStorage`.
//! Server-side (SSR): calls return [`BackendError::Unavailable`]; pages only
//! issue backend calls from effects and event handlers, which never run
//! during server rendering.
//!
//! WIRE MAPPING
//! ============
//! - auth:    `/auth/v1/signup`, `/auth/v1/token?grant_type=...`, `/auth/v1/logout`
//! - rows:    `/rest/v1/{table}` with PostgREST query params
//! - blobs:   `/storage/v1/object/{bucket}/{path}`, public reads under
//!   `/storage/v1/object/public/{bucket}/{path}`

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "supabase_test.rs"]
mod supabase_test;

use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use super::backend::{BackendError, BlobApi, Filter, IdentityApi, Select, TableApi};
use super::types::{AuthUser, ImageFile, Session};
use crate::config::BackendConfig;

/// Sessions this close to expiry are refreshed before use.
#[cfg(any(test, feature = "hydrate"))]
const EXPIRY_MARGIN_SECS: i64 = 10;

/// Supabase-backed implementation of [`crate::net::backend::Backend`].
pub struct SupabaseClient {
    config: BackendConfig,
    session: RwLock<Option<Session>>,
}

impl SupabaseClient {
    #[must_use]
    pub fn new(config: BackendConfig) -> Self {
        Self { config, session: RwLock::new(None) }
    }

    fn current_session(&self) -> Option<Session> {
        match self.session.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store_session(&self, session: Option<Session>) {
        match self.session.write() {
            Ok(mut guard) => *guard = session,
            Err(poisoned) => *poisoned.into_inner() = session,
        }
    }
}

// =============================================================================
// PURE HELPERS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn auth_endpoint(base: &str, path: &str) -> String {
    format!("{base}/auth/v1/{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn rest_endpoint(base: &str, table: &str) -> String {
    format!("{base}/rest/v1/{table}")
}

#[cfg(any(test, feature = "hydrate"))]
fn object_endpoint(base: &str, bucket: &str, path: &str) -> String {
    format!("{base}/storage/v1/object/{bucket}/{}", path.trim_start_matches('/'))
}

fn public_object_url(base: &str, bucket: &str, path: &str) -> String {
    format!("{base}/storage/v1/object/public/{bucket}/{}", path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn filter_params(filters: &[Filter]) -> Vec<(String, String)> {
    filters.iter().map(Filter::to_param).collect()
}

/// Pick the human-readable message out of an auth, rest, or storage error body.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<Value>(body).unwrap_or(Value::Null);
    ["msg", "message", "error_description", "error"]
        .iter()
        .filter_map(|key| parsed.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|text| !text.is_empty())
        .map_or_else(|| format!("request failed: {status}"), str::to_owned)
}

#[cfg(any(test, feature = "hydrate"))]
fn is_session_expired(expires_at: Option<i64>, now_secs: i64) -> bool {
    expires_at.is_some_and(|at| at <= now_secs + EXPIRY_MARGIN_SECS)
}

/// Parse a token response, deriving `expires_at` from `expires_in` when the
/// service omits it.
#[cfg(any(test, feature = "hydrate"))]
fn parse_session(value: Value, now_secs: i64) -> Result<Session, BackendError> {
    let expires_in = value.get("expires_in").and_then(Value::as_i64);
    let mut session: Session = serde_json::from_value(value).map_err(|e| BackendError::Decode(e.to_string()))?;
    if session.expires_at.is_none() {
        session.expires_at = expires_in.map(|secs| now_secs + secs);
    }
    Ok(session)
}

/// Sign-up answers with a full session when autoconfirm is on, and with the
/// bare user record (or `{ user }`) when email confirmation is pending.
#[cfg(any(test, feature = "hydrate"))]
fn parse_sign_up(value: Value, now_secs: i64) -> Result<(AuthUser, Option<Session>), BackendError> {
    if value.get("access_token").is_some() {
        let session = parse_session(value, now_secs)?;
        return Ok((session.user.clone(), Some(session)));
    }
    let user_value = match value.get("user") {
        Some(user) if user.is_object() => user.clone(),
        _ => value,
    };
    let user = serde_json::from_value(user_value).map_err(|e| BackendError::Decode(e.to_string()))?;
    Ok((user, None))
}

/// Collapse a PostgREST body into rows: arrays pass through, a single object
/// becomes one row, an empty body becomes no rows.
#[cfg(any(test, feature = "hydrate"))]
fn rows_from_body(body: Value) -> Vec<Value> {
    match body {
        Value::Array(rows) => rows,
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

// =============================================================================
// BROWSER TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
mod browser {
    use gloo_net::http::{RequestBuilder, Response};
    use serde_json::Value;

    use super::error_message;
    use crate::net::backend::BackendError;
    use crate::net::types::Session;

    #[allow(clippy::cast_possible_truncation)]
    pub(super) fn now_secs() -> i64 {
        (js_sys::Date::now() / 1000.0) as i64
    }

    pub(super) fn transport(e: gloo_net::Error) -> BackendError {
        BackendError::Transport(e.to_string())
    }

    pub(super) fn query(builder: RequestBuilder, params: &[(String, String)]) -> RequestBuilder {
        builder.query(params.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Read a response, turning non-2xx statuses into `Remote` errors.
    pub(super) async fn read_json(resp: Response) -> Result<Value, BackendError> {
        let status = resp.status();
        let text = resp.text().await.map_err(transport)?;
        if !(200..300).contains(&status) {
            return Err(BackendError::remote(status, error_message(status, &text)));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| BackendError::Decode(e.to_string()))
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    pub(super) fn load_persisted(key: &str) -> Option<Session> {
        let raw = local_storage()?.get_item(key).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                log::warn!("discarding unreadable stored session: {e}");
                None
            }
        }
    }

    pub(super) fn persist(key: &str, session: Option<&Session>) {
        let Some(storage) = local_storage() else {
            return;
        };
        let result = match session.map(serde_json::to_string) {
            Some(Ok(raw)) => storage.set_item(key, &raw),
            Some(Err(e)) => {
                log::warn!("session not persisted: {e}");
                return;
            }
            None => storage.remove_item(key),
        };
        if result.is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
}

#[cfg(feature = "hydrate")]
impl SupabaseClient {
    /// Keep a session in memory and in `localStorage`.
    fn remember(&self, session: Option<Session>) {
        browser::persist(&self.config.session_storage_key(), session.as_ref());
        self.store_session(session);
    }

    fn bearer(&self) -> String {
        self.current_session()
            .map_or_else(|| self.config.anon_key.clone(), |s| s.access_token)
    }

    fn authed(&self, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
        builder
            .header("apikey", &self.config.anon_key)
            .header("Authorization", &format!("Bearer {}", self.bearer()))
    }

    async fn token_grant(&self, grant_type: &str, body: &Value) -> Result<Session, BackendError> {
        let url = auth_endpoint(&self.config.url, "token");
        let resp = self
            .authed(gloo_net::http::Request::post(&url))
            .query([("grant_type", grant_type)])
            .json(body)
            .map_err(browser::transport)?
            .send()
            .await
            .map_err(browser::transport)?;
        let value = browser::read_json(resp).await?;
        parse_session(value, browser::now_secs())
    }
}

// =============================================================================
// CAPABILITIES
// =============================================================================

#[async_trait(?Send)]
impl IdentityApi for SupabaseClient {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let url = auth_endpoint(&self.config.url, "signup");
            let payload = serde_json::json!({ "email": email, "password": password });
            let resp = self
                .authed(gloo_net::http::Request::post(&url))
                .json(&payload)
                .map_err(browser::transport)?
                .send()
                .await
                .map_err(browser::transport)?;
            let value = browser::read_json(resp).await?;
            let (user, session) = parse_sign_up(value, browser::now_secs())?;
            if session.is_some() {
                self.remember(session);
            }
            Ok(user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(BackendError::Unavailable)
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthUser, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = serde_json::json!({ "email": email, "password": password });
            let session = self.token_grant("password", &payload).await?;
            let user = session.user.clone();
            self.remember(Some(session));
            Ok(user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(BackendError::Unavailable)
        }
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            if self.current_session().is_none() {
                self.remember(None);
                return Ok(());
            }
            let url = auth_endpoint(&self.config.url, "logout");
            let result = match self.authed(gloo_net::http::Request::post(&url)).send().await {
                Ok(resp) => browser::read_json(resp).await.map(|_| ()),
                Err(e) => Err(browser::transport(e)),
            };
            // The local session is dropped whether or not the service acknowledged.
            self.remember(None);
            result
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.store_session(None);
            Ok(())
        }
    }

    async fn get_session(&self) -> Result<Option<Session>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let key = self.config.session_storage_key();
            let Some(session) = self.current_session().or_else(|| browser::load_persisted(&key)) else {
                return Ok(None);
            };
            if !is_session_expired(session.expires_at, browser::now_secs()) {
                self.store_session(Some(session.clone()));
                return Ok(Some(session));
            }
            let Some(refresh_token) = session.refresh_token.clone() else {
                self.remember(None);
                return Ok(None);
            };
            let body = serde_json::json!({ "refresh_token": refresh_token });
            match self.token_grant("refresh_token", &body).await {
                Ok(fresh) => {
                    self.remember(Some(fresh.clone()));
                    Ok(Some(fresh))
                }
                Err(e) => {
                    log::warn!("session refresh failed: {e}");
                    self.remember(None);
                    Ok(None)
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(self.current_session())
        }
    }
}

#[async_trait(?Send)]
impl TableApi for SupabaseClient {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let url = rest_endpoint(&self.config.url, &query.table);
            let mut builder = browser::query(self.authed(gloo_net::http::Request::get(&url)), &query.to_params());
            if query.single {
                builder = builder.header("Accept", "application/vnd.pgrst.object+json");
            }
            let resp = builder.send().await.map_err(browser::transport)?;
            Ok(rows_from_body(browser::read_json(resp).await?))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = query;
            Err(BackendError::Unavailable)
        }
    }

    async fn insert(&self, table: &str, rows: Value) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let url = rest_endpoint(&self.config.url, table);
            let resp = self
                .authed(gloo_net::http::Request::post(&url))
                .header("Prefer", "return=minimal")
                .json(&rows)
                .map_err(browser::transport)?
                .send()
                .await
                .map_err(browser::transport)?;
            browser::read_json(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (table, rows);
            Err(BackendError::Unavailable)
        }
    }

    async fn update(&self, table: &str, filters: &[Filter], patch: Value) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let url = rest_endpoint(&self.config.url, table);
            let resp = browser::query(self.authed(gloo_net::http::Request::patch(&url)), &filter_params(filters))
                .header("Prefer", "return=representation")
                .json(&patch)
                .map_err(browser::transport)?
                .send()
                .await
                .map_err(browser::transport)?;
            let rows = rows_from_body(browser::read_json(resp).await?);
            if rows.is_empty() {
                return Err(BackendError::remote(403, super::backend::NO_ROWS_AFFECTED));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (table, filters, patch);
            Err(BackendError::Unavailable)
        }
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let url = rest_endpoint(&self.config.url, table);
            let resp = browser::query(self.authed(gloo_net::http::Request::delete(&url)), &filter_params(filters))
                .header("Prefer", "return=representation")
                .send()
                .await
                .map_err(browser::transport)?;
            let rows = rows_from_body(browser::read_json(resp).await?);
            if rows.is_empty() {
                return Err(BackendError::remote(403, super::backend::NO_ROWS_AFFECTED));
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (table, filters);
            Err(BackendError::Unavailable)
        }
    }
}

#[async_trait(?Send)]
impl BlobApi for SupabaseClient {
    async fn upload(&self, bucket: &str, path: &str, file: &ImageFile) -> Result<(), BackendError> {
        #[cfg(feature = "hydrate")]
        {
            let url = object_endpoint(&self.config.url, bucket, path);
            let body = js_sys::Uint8Array::from(file.bytes.as_slice());
            let resp = self
                .authed(gloo_net::http::Request::post(&url))
                .header("Content-Type", file.content_type_or_default())
                .header("cache-control", "max-age=3600")
                .header("x-upsert", "false")
                .body(body)
                .map_err(browser::transport)?
                .send()
                .await
                .map_err(browser::transport)?;
            browser::read_json(resp).await.map(|_| ())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (bucket, path, file);
            Err(BackendError::Unavailable)
        }
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        public_object_url(&self.config.url, bucket, path)
    }
}
