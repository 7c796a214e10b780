//! Storage layer
//!
//! Handlers talk to storage through [`EmployeeStore`]; the server picks
//! [`MongoEmployeeStore`] or [`MemoryEmployeeStore`] at startup.

pub mod document;
pub mod memory;
pub mod mongo;

pub use document::EmployeeDocument;
pub use memory::MemoryEmployeeStore;
pub use mongo::MongoEmployeeStore;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use shared::error::{AppError, ErrorCode};
use shared::models::{Employee, EmployeeInput};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    InvalidId(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Database(String),
}

impl From<mongodb::error::Error> for RepoError {
    fn from(err: mongodb::error::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::InvalidId(msg) => AppError::invalid_format(msg),
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::EmployeeNotFound, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Parse a path identifier into an ObjectId
pub fn parse_object_id(id: &str) -> RepoResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|e| RepoError::InvalidId(e.to_string()))
}

/// Single-collection employee storage.
///
/// Each method is one round-trip against the backing store.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Every document in the collection, in natural order
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;

    /// Fetch one document by identifier
    async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<Employee>>;

    /// Insert a new document and return the storage-assigned identifier
    async fn insert(&self, input: &EmployeeInput) -> RepoResult<ObjectId>;

    /// Overwrite name/salary/age on the matching document.
    ///
    /// Returns the document as stored after the update, `None` if nothing matched.
    async fn update(&self, id: ObjectId, input: &EmployeeInput) -> RepoResult<Option<Employee>>;

    /// Delete the matching document, returning the number removed
    async fn delete(&self, id: ObjectId) -> RepoResult<u64>;

    /// Check the store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
