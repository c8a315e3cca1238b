use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use crate::db::{EmployeeRepository, StorageError};

pub struct AppState {
    pub repo: Arc<dyn EmployeeRepository>,
    pub store_timeout: Duration,
}

impl AppState {
    pub fn new(repo: Arc<dyn EmployeeRepository>, store_timeout: Duration) -> Self {
        AppState { repo, store_timeout }
    }

    /// Runs a store call under the per-request deadline. On expiry the call's
    /// future is dropped, which cancels the in-flight query.
    pub async fn bounded<T, F>(&self, call: F) -> Result<T, StorageError>
    where
        F: Future<Output = Result<T, StorageError>>,
    {
        tokio::time::timeout(self.store_timeout, call)
            .await
            .map_err(|_| StorageError::Timeout(self.store_timeout))?
    }
}
