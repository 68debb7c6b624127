use std::path::PathBuf;

use clap::{Parser, Subcommand};
use trivia_api::db::transfer::{export_data, import_data};
use trivia_api::db::{establish_connection, run_migrations};
use trivia_api::telemetry::init_tracing;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path
    db_path: PathBuf,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create or update the database schema
    Migrate,
    /// Import categories.csv and questions.csv from a directory
    Import { path: PathBuf },
    /// Export categories and questions as csv into a directory
    Export { path: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let pool = establish_connection(&cli.db_path.display().to_string(), 1).await?;
    match cli.command {
        Commands::Migrate => run_migrations(&pool).await?,
        Commands::Export { path } => export_data(&pool, &path).await?,
        Commands::Import { path } => {
            run_migrations(&pool).await?;
            import_data(&pool, &path).await?
        }
    }
    Ok(())
}
