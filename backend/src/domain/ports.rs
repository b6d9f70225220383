//! Port abstraction for student persistence adapters.

use async_trait::async_trait;

use super::student::{Student, StudentPatch};

/// Errors raised by student repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudentPersistenceError {
    /// A connection could not be checked out for the operation.
    #[error("student repository connection failed: {message}")]
    Connection { message: String },

    /// A query or mutation failed during execution.
    #[error("student repository query failed: {message}")]
    Query { message: String },

    /// An insert collided with an existing record on the unique key.
    #[error("a student with identifier {nim} already exists")]
    Duplicate { nim: String },
}

impl StudentPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a duplicate-identifier error for the given `nim`.
    pub fn duplicate(nim: impl Into<String>) -> Self {
        Self::Duplicate { nim: nim.into() }
    }
}

/// Persistence port for student records.
///
/// Uniqueness of `nim` is the storage layer's responsibility: `insert` must
/// fail atomically with [`StudentPersistenceError::Duplicate`] when the key
/// collides, so concurrent creates cannot both succeed. `update` and `delete`
/// report whether a row was affected; the caller decides the not-found
/// outcome.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Persist a new record.
    async fn insert(&self, student: &Student) -> Result<(), StudentPersistenceError>;

    /// Fetch every record.
    async fn list(&self) -> Result<Vec<Student>, StudentPersistenceError>;

    /// Fetch records whose name matches the fragment with SQL `LIKE`
    /// semantics. The fragment is wrapped in `%` wildcards and passed through
    /// unescaped, so `%` and `_` supplied by the caller act as wildcards.
    async fn search_by_name(&self, fragment: &str)
    -> Result<Vec<Student>, StudentPersistenceError>;

    /// Replace the mutable fields of the record keyed by `nim`. Returns
    /// `false` when no such record exists.
    async fn update(&self, nim: &str, patch: &StudentPatch)
    -> Result<bool, StudentPersistenceError>;

    /// Remove the record keyed by `nim`. Returns `false` when no such record
    /// exists.
    async fn delete(&self, nim: &str) -> Result<bool, StudentPersistenceError>;
}
