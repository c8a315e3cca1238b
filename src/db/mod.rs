pub mod memory;
pub mod postgres;
pub mod repository;

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub use memory::MemoryEmployeeRepository;
pub use postgres::PgEmployeeRepository;
pub use repository::{EmployeeRepository, StorageError};

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}
