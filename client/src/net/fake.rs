//! In-memory backend for tests.
//!
//! Behaves like the hosted service where the app can observe it: rows get
//! remote ids and timestamps, writes to rows owned by someone else are
//! filtered out the way row-level security does, and uploads refuse to
//! overwrite. Every call is appended to a log so tests can assert ordering.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::Value;

use super::backend::{BackendError, BlobApi, Filter, IdentityApi, NO_ROWS_AFFECTED, Select, TableApi};
use super::types::{AuthUser, ImageFile, Session};

pub const FAKE_STORAGE_BASE: &str = "https://fake.storage";

/// One recorded backend call.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    SignUp(String),
    SignIn(String),
    SignOut,
    GetSession,
    Select(String),
    Insert { table: String, rows: Value },
    Update { table: String, patch: Value },
    Delete(String),
    Upload { bucket: String, path: String },
}

#[derive(Default)]
struct Inner {
    accounts: Vec<(String, String, AuthUser)>,
    session: Option<Session>,
    tables: HashMap<String, Vec<Value>>,
    blobs: HashSet<String>,
    failures: HashMap<&'static str, String>,
    calls: Vec<Call>,
    next_id: u64,
}

#[derive(Default)]
pub struct FakeBackend {
    inner: Mutex<Inner>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account that `sign_in_with_password` accepts.
    pub fn with_account(self, id: &str, email: &str, password: &str) -> Self {
        let user = AuthUser { id: id.to_owned(), email: Some(email.to_owned()) };
        lock(&self.inner).accounts.push((email.to_owned(), password.to_owned(), user));
        self
    }

    /// Start with an active session for `user_id`.
    pub fn signed_in_as(self, user_id: &str) -> Self {
        lock(&self.inner).session = Some(Session {
            access_token: format!("token-{user_id}"),
            refresh_token: None,
            expires_at: None,
            user: AuthUser { id: user_id.to_owned(), email: None },
        });
        self
    }

    /// Seed a row as-is.
    pub fn with_row(self, table: &str, row: Value) -> Self {
        lock(&self.inner).tables.entry(table.to_owned()).or_default().push(row);
        self
    }

    /// Make every later call of `op` fail with `message`.
    pub fn fail(&self, op: &'static str, message: &str) {
        lock(&self.inner).failures.insert(op, message.to_owned());
    }

    pub fn calls(&self) -> Vec<Call> {
        lock(&self.inner).calls.clone()
    }

    pub fn rows(&self, table: &str) -> Vec<Value> {
        lock(&self.inner).tables.get(table).cloned().unwrap_or_default()
    }

    pub fn has_blob(&self, bucket: &str, path: &str) -> bool {
        lock(&self.inner).blobs.contains(&format!("{bucket}/{path}"))
    }

    fn begin(&self, op: &'static str, call: Call) -> Result<MutexGuard<'_, Inner>, BackendError> {
        let mut inner = lock(&self.inner);
        inner.calls.push(call);
        match inner.failures.get(op) {
            Some(message) => Err(BackendError::remote(400, message.clone())),
            None => Ok(inner),
        }
    }
}

fn matches_filters(row: &Value, filters: &[Filter]) -> bool {
    filters.iter().all(|filter| match filter {
        Filter::Eq { column, value } => match row.get(column) {
            Some(Value::String(s)) => s == value,
            Some(Value::Number(n)) => n.to_string() == *value,
            _ => false,
        },
    })
}

fn compare_values(a: Option<&Value>, b: Option<&Value>, nulls_first: bool) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => {
            if nulls_first {
                Ordering::Less
            } else {
                Ordering::Greater
            }
        }
        (Some(_), None) => {
            if nulls_first {
                Ordering::Greater
            } else {
                Ordering::Less
            }
        }
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let x = x.as_f64().unwrap_or_default();
            let y = y.as_f64().unwrap_or_default();
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(x), Some(y)) => x.as_str().unwrap_or_default().cmp(y.as_str().unwrap_or_default()),
    }
}

fn owner_of(row: &Value) -> Option<&str> {
    row.get("user_id").and_then(Value::as_str)
}

#[async_trait(?Send)]
impl IdentityApi for FakeBackend {
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthUser, BackendError> {
        let mut inner = self.begin("sign_up", Call::SignUp(email.to_owned()))?;
        if inner.accounts.iter().any(|(e, _, _)| e == email) {
            return Err(BackendError::remote(422, "User already registered"));
        }
        inner.next_id += 1;
        let user = AuthUser { id: format!("user-{}", inner.next_id), email: Some(email.to_owned()) };
        inner.accounts.push((email.to_owned(), password.to_owned(), user.clone()));
        Ok(user)
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<AuthUser, BackendError> {
        let mut inner = self.begin("sign_in", Call::SignIn(email.to_owned()))?;
        let user = inner
            .accounts
            .iter()
            .find(|(e, p, _)| e == email && p == password)
            .map(|(_, _, user)| user.clone())
            .ok_or_else(|| BackendError::remote(400, "Invalid login credentials"))?;
        inner.session = Some(Session {
            access_token: format!("token-{}", user.id),
            refresh_token: None,
            expires_at: None,
            user: user.clone(),
        });
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        let mut inner = lock(&self.inner);
        inner.calls.push(Call::SignOut);
        inner.session = None;
        match inner.failures.get("sign_out") {
            Some(message) => Err(BackendError::remote(500, message.clone())),
            None => Ok(()),
        }
    }

    async fn get_session(&self) -> Result<Option<Session>, BackendError> {
        let inner = self.begin("get_session", Call::GetSession)?;
        Ok(inner.session.clone())
    }
}

#[async_trait(?Send)]
impl TableApi for FakeBackend {
    async fn select(&self, query: &Select) -> Result<Vec<Value>, BackendError> {
        let inner = self.begin("select", Call::Select(query.table.clone()))?;
        let mut rows: Vec<Value> = inner
            .tables
            .get(&query.table)
            .map(|rows| rows.iter().filter(|row| matches_filters(row, &query.filters)).cloned().collect())
            .unwrap_or_default();
        rows.sort_by(|a, b| {
            query
                .order
                .iter()
                .map(|order| {
                    // Postgres places nulls last for asc and first for desc by default.
                    let nulls_first = order.nulls_first.unwrap_or(!order.ascending);
                    let ord = compare_values(a.get(&order.column), b.get(&order.column), nulls_first);
                    let is_null_cmp = a.get(&order.column).is_none_or(Value::is_null)
                        || b.get(&order.column).is_none_or(Value::is_null);
                    if order.ascending || is_null_cmp { ord } else { ord.reverse() }
                })
                .find(|ord| ord.is_ne())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some((from, to)) = query.range {
            let take = if to < from { 0 } else { (to - from + 1) as usize };
            rows = rows.into_iter().skip(from as usize).take(take).collect();
        }
        if query.single && rows.len() != 1 {
            return Err(BackendError::remote(
                406,
                "JSON object requested, multiple (or no) rows returned",
            ));
        }
        Ok(rows)
    }

    async fn insert(&self, table: &str, rows: Value) -> Result<(), BackendError> {
        let mut inner = self.begin("insert", Call::Insert { table: table.to_owned(), rows: rows.clone() })?;
        let session_user = inner.session.as_ref().map(|s| s.user.id.clone());
        let rows = match rows {
            Value::Array(rows) => rows,
            other => vec![other],
        };
        if rows.iter().any(|row| owner_of(row) != session_user.as_deref()) {
            return Err(BackendError::remote(
                403,
                format!("new row violates row-level security policy for table \"{table}\""),
            ));
        }
        for mut row in rows {
            inner.next_id += 1;
            let id = inner.next_id;
            if let Value::Object(map) = &mut row {
                map.entry("id").or_insert_with(|| Value::String(format!("row-{id}")));
                map.entry("created_at")
                    .or_insert_with(|| Value::String(format!("2025-01-01T00:00:{:02}+00:00", id % 60)));
            }
            inner.tables.entry(table.to_owned()).or_default().push(row);
        }
        Ok(())
    }

    async fn update(&self, table: &str, filters: &[Filter], patch: Value) -> Result<(), BackendError> {
        let mut inner = self.begin("update", Call::Update { table: table.to_owned(), patch: patch.clone() })?;
        let session_user = inner.session.as_ref().map(|s| s.user.id.clone());
        let mut affected = 0;
        for row in inner.tables.entry(table.to_owned()).or_default().iter_mut() {
            if !matches_filters(row, filters) || owner_of(row) != session_user.as_deref() {
                continue;
            }
            if let (Value::Object(target), Value::Object(changes)) = (row, &patch) {
                for (key, value) in changes {
                    target.insert(key.clone(), value.clone());
                }
                affected += 1;
            }
        }
        if affected == 0 {
            return Err(BackendError::remote(403, NO_ROWS_AFFECTED));
        }
        Ok(())
    }

    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<(), BackendError> {
        let mut inner = self.begin("delete", Call::Delete(table.to_owned()))?;
        let session_user = inner.session.as_ref().map(|s| s.user.id.clone());
        let rows = inner.tables.entry(table.to_owned()).or_default();
        let before = rows.len();
        rows.retain(|row| !(matches_filters(row, filters) && owner_of(row) == session_user.as_deref()));
        if rows.len() == before {
            return Err(BackendError::remote(403, NO_ROWS_AFFECTED));
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl BlobApi for FakeBackend {
    async fn upload(&self, bucket: &str, path: &str, _file: &ImageFile) -> Result<(), BackendError> {
        let mut inner = self.begin("upload", Call::Upload { bucket: bucket.to_owned(), path: path.to_owned() })?;
        if !inner.blobs.insert(format!("{bucket}/{path}")) {
            return Err(BackendError::remote(409, "The resource already exists"));
        }
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!("{FAKE_STORAGE_BASE}/{bucket}/{path}")
    }
}
