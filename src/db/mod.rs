pub mod queries;
pub mod sqlite;
pub mod store;
pub mod transfer;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

pub use queries::categories::Category;
pub use queries::questions::{NewQuestion, Question};
pub use sqlite::SqliteStore;
pub use store::{QuestionStore, StoreError, StoreResult};

use sqlx::Error;

/// Opens a pool for the database file at `path`, creating the file when missing.
/// Foreign keys are enforced on every connection.
pub async fn establish_connection(path: &str, max_connections: u32) -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str(format!("sqlite:{}", path).as_str())?
        .create_if_missing(true)
        .foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// A single-connection in-memory database; every connection to `:memory:` is a fresh database,
/// so the pool must never open a second one.
pub async fn in_memory() -> Result<SqlitePool, Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
