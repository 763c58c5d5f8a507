//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define a record-agnostic data access contract (`Repository`).
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - A missing row is `Ok(None)` on reads and a silent no-op on writes.
//! - Store-level constraint failures surface as `ConstraintViolation`, never
//!   as a generic database error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod student_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error raised by repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// The database could not be opened for this operation.
    Connection(DbError),
    /// A store constraint (for students: unique email) rejected the write.
    ConstraintViolation(String),
    /// A statement failed on an open connection.
    Db(DbError),
    /// A persisted row could not be decoded.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(err) => write!(f, "database unavailable: {err}"),
            Self::ConstraintViolation(message) => f.write_str(message),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connection(err) | Self::Db(err) => Some(err),
            Self::ConstraintViolation(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        if is_constraint_violation(&value) {
            Self::ConstraintViolation(value.to_string())
        } else {
            Self::Db(DbError::Sqlite(value))
        }
    }
}

pub(crate) fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err.sqlite_error_code(),
        Some(rusqlite::ErrorCode::ConstraintViolation)
    )
}

/// Generic CRUD capability over one record type.
///
/// `Draft` is the insertable shape (no id, no server-assigned fields).
pub trait Repository<T> {
    type Id: Copy;
    type Draft;

    /// Persists a new record and returns its assigned id.
    fn insert(&self, draft: &Self::Draft) -> RepoResult<Self::Id>;
    fn get_by_id(&self, id: Self::Id) -> RepoResult<Option<T>>;
    /// Replaces every mutable field of the matching record; no-op when absent.
    fn update(&self, record: &T) -> RepoResult<()>;
    /// Removes the matching record; no-op when absent.
    fn delete_by_id(&self, id: Self::Id) -> RepoResult<()>;
    /// All records in ascending id order.
    fn list_all(&self) -> RepoResult<Vec<T>>;
}
