use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use crate::models::employee::{Employee, EmployeeId, NewEmployee};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("failed to decode stored employee: {0}")]
    Decode(String),
    #[error("store call exceeded {0:?}")]
    Timeout(Duration),
}

/// The four operations the HTTP layer needs from the employee store.
/// Filters and ids are built by the implementation, never by callers.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// All employees in the store's natural order. Fails as a whole if any
    /// record cannot be decoded.
    async fn find_all(&self) -> Result<Vec<Employee>, StorageError>;

    /// Stores the employee and returns the id the store generated for it.
    async fn insert_one(&self, employee: &NewEmployee) -> Result<EmployeeId, StorageError>;

    /// Replaces every field of the matching record. Returns whether a record matched.
    async fn replace_by_id(&self, id: EmployeeId, employee: &NewEmployee) -> Result<bool, StorageError>;

    /// Returns whether a record was removed.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<bool, StorageError>;
}
