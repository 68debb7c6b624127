use std::sync::Arc;

use anyhow::Context;
use trivia_api::config::Settings;
use trivia_api::db::{self, SqliteStore};
use trivia_api::{server::app::run_server, telemetry::init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let settings = Settings::load().context("Failed to load settings")?;
    let pool = db::establish_connection(
        &settings.database.path,
        settings.database.max_connections,
    )
    .await
    .with_context(|| format!("Cannot open database {}", settings.database.path))?;

    tracing::info!("Running db migrations...");
    db::run_migrations(&pool).await?;

    run_server(Arc::new(SqliteStore::new(pool)), &settings).await
}
