//! Injected backend interface: identity, table queries, and blob storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages never talk HTTP directly. They receive an `Arc<dyn Backend>` through
//! the session context and call the typed helpers in `posts`, `comments`, and
//! `images`, which in turn speak the three capability traits below. The real
//! implementation is `supabase::SupabaseClient`; tests use `fake::FakeBackend`.
//!
//! ERROR HANDLING
//! ==============
//! Remote failures keep the backend's own message so views can surface it
//! verbatim. Authorization is enforced remotely and arrives as an ordinary
//! `Remote` error with no distinguishing code.

#[cfg(test)]
#[path = "backend_test.rs"]
mod backend_test;

use async_trait::async_trait;
use serde_json::Value;

use super::types::{AuthUser, ImageFile, Session};

/// Message for an update/delete the row store silently filtered to zero rows,
/// which is how row-level security rejects writes to rows the caller does
/// not own.
pub const NO_ROWS_AFFECTED: &str = "Row not found or permission denied.";

/// Failure of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    /// The backend answered with an error; `message` is shown to the user as-is.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Backend calls only run in the browser.
    #[error("backend not available on server")]
    Unavailable,
}

impl BackendError {
    /// Build a `Remote` error from a status and message.
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::Remote { status, message: message.into() }
    }
}

/// Failure of a user action that may stop before reaching the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// The action was refused locally, e.g. no signed-in session.
    #[error("{0}")]
    Precondition(&'static str),
}

// =============================================================================
// QUERY MODEL
// =============================================================================

/// Row filter. Only equality is needed by the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Filter {
    Eq { column: String, value: String },
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Eq { column: column.into(), value: value.into() }
    }

    /// Column and PostgREST operator expression (`eq.<value>`).
    #[must_use]
    pub fn to_param(&self) -> (String, String) {
        match self {
            Self::Eq { column, value } => (column.clone(), format!("eq.{value}")),
        }
    }
}

/// One ordering term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
    /// `None` leaves null placement to the backend default.
    pub nulls_first: Option<bool>,
}

impl Order {
    /// PostgREST order term, e.g. `created_at.desc.nullslast`.
    #[must_use]
    pub fn to_term(&self) -> String {
        let dir = if self.ascending { "asc" } else { "desc" };
        match self.nulls_first {
            Some(true) => format!("{}.{dir}.nullsfirst", self.column),
            Some(false) => format!("{}.{dir}.nullslast", self.column),
            None => format!("{}.{dir}", self.column),
        }
    }
}

/// A read query against one table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Select {
    pub table: String,
    pub columns: String,
    pub filters: Vec<Filter>,
    pub order: Vec<Order>,
    /// Inclusive row range `(from, to)`, zero-based.
    pub range: Option<(u32, u32)>,
    /// Expect exactly one row; zero or many rows is an error.
    pub single: bool,
}

impl Select {
    /// Start a query selecting every column of `table`.
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: "*".to_owned(),
            filters: Vec::new(),
            order: Vec::new(),
            range: None,
            single: false,
        }
    }

    #[must_use]
    pub fn columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = columns.into();
        self
    }

    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push(Filter::eq(column, value));
        self
    }

    #[must_use]
    pub fn order(mut self, column: impl Into<String>, ascending: bool, nulls_first: Option<bool>) -> Self {
        self.order.push(Order { column: column.into(), ascending, nulls_first });
        self
    }

    #[must_use]
    pub fn range(mut self, from: u32, to: u32) -> Self {
        self.range = Some((from, to));
        self
    }

    #[must_use]
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Flatten to PostgREST query parameters.
    ///
    /// Ranges map to `offset`/`limit`; an inverted range yields `limit=0`.
    #[must_use]
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_owned(), self.columns.clone())];
        params.extend(self.filters.iter().map(Filter::to_param));
        if !self.order.is_empty() {
            let terms = self.order.iter().map(Order::to_term).collect::<Vec<_>>();
            params.push(("order".to_owned(), terms.join(",")));
        }
        if let Some((from, to)) = self.range {
            let limit = if to < from { 0 } else { to - from + 1 };
            params.push(("offset".to_owned(), from.to_string()));
            params.push(("limit".to_owned(), limit.to_string()));
        }
        params
    }
}

// =============================================================================
// CAPABILITIES
// =============================================================================

/// Account and session operations.
#[async_trait(?Send)]
pub trait IdentityApi {
    /// Create an account. Returns the new user even when the service still
    /// requires email confirmation before issuing a session.
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, BackendError>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthUser, BackendError>;

    async fn sign_out(&self) -> Result<(), BackendError>;

    /// Current session, if one is stored and still valid.
    async fn get_session(&self) -> Result<Option<Session>, BackendError>;
}

/// Row storage with filter/sort/range queries.
#[async_trait(?Send)]
pub trait TableApi {
    /// Run a read query. `single` queries return exactly one row.
    async fn select(&self, query: &Select) -> Result<Vec<Value>, BackendError>;

    /// Insert one or more rows (`rows` is an object or an array of objects).
    async fn insert(&self, table: &str, rows: Value) -> Result<(), BackendError>;

    /// Patch rows matching `filters`. Affecting no rows is an error.
    async fn update(&self, table: &str, filters: &[Filter], patch: Value) -> Result<(), BackendError>;

    /// Delete rows matching `filters`. Affecting no rows is an error.
    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), BackendError>;
}

/// Blob storage with public URL issuance.
#[async_trait(?Send)]
pub trait BlobApi {
    /// Store `file` at `path` inside `bucket`, refusing to overwrite.
    async fn upload(&self, bucket: &str, path: &str, file: &ImageFile) -> Result<(), BackendError>;

    /// Public URL for an object. Does not check that the object exists.
    fn public_url(&self, bucket: &str, path: &str) -> String;
}

/// The full capability set injected into the app.
pub trait Backend: IdentityApi + TableApi + BlobApi + Send + Sync {}

impl<T> Backend for T where T: IdentityApi + TableApi + BlobApi + Send + Sync {}

/// Id of the user behind the backend's current session.
///
/// Writes ask the backend rather than the cached auth state so the id always
/// matches what row-level policies will see.
///
/// # Errors
///
/// Returns [`ActionError::Precondition`] with `not_signed_in` when there is no
/// session, or the backend error when the lookup fails.
pub async fn session_user_id<B>(backend: &B, not_signed_in: &'static str) -> Result<String, ActionError>
where
    B: IdentityApi + ?Sized,
{
    backend
        .get_session()
        .await?
        .map(|session| session.user.id)
        .ok_or(ActionError::Precondition(not_signed_in))
}

/// Deserialize a list of rows into typed records.
///
/// # Errors
///
/// Returns [`BackendError::Decode`] when any row fails to deserialize.
pub fn decode_rows<T: serde::de::DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, BackendError> {
    rows.into_iter()
        .map(|row| serde_json::from_value(row).map_err(|e| BackendError::Decode(e.to_string())))
        .collect()
}

/// Deserialize the single row of a `single` query.
///
/// # Errors
///
/// Returns [`BackendError::Decode`] when no row came back or the row fails to
/// deserialize.
pub fn decode_single<T: serde::de::DeserializeOwned>(rows: Vec<Value>) -> Result<T, BackendError> {
    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| BackendError::Decode("expected one row, got none".to_owned()))?;
    serde_json::from_value(row).map_err(|e| BackendError::Decode(e.to_string()))
}
