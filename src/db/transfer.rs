//! CSV seed data: a directory holding `categories.csv` and `questions.csv`.

use std::fs::File;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;

use super::queries::categories::{get_all_categories, import_categories};
use super::queries::questions::{get_all_questions, import_questions};
use super::{Category, Question};

pub const CATEGORIES_FILE: &str = "categories.csv";
pub const QUESTIONS_FILE: &str = "questions.csv";

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = csv::Writer::from_writer(file);
    for row in rows {
        writer
            .serialize(row)
            .with_context(|| format!("Failed to write a record to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))
}

/// Reads every record of `path`. Errors name the file and the 1-based record number.
pub fn read_csv<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    csv::Reader::from_reader(file)
        .deserialize()
        .enumerate()
        .map(|(n, record)| {
            record.with_context(|| format!("Bad record {} in {}", n + 1, path.display()))
        })
        .collect()
}

pub async fn export_data(pool: &SqlitePool, dir: &Path) -> anyhow::Result<()> {
    let categories = get_all_categories(pool).await?;
    let questions = get_all_questions(pool).await?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    tracing::info!(
        categories = categories.len(),
        questions = questions.len(),
        "Exporting to {}",
        dir.display()
    );
    write_csv(&dir.join(CATEGORIES_FILE), &categories)?;
    write_csv(&dir.join(QUESTIONS_FILE), &questions)
}

/// Loads both files before touching the database, so a bad file imports nothing.
pub async fn import_data(pool: &SqlitePool, dir: &Path) -> anyhow::Result<()> {
    let categories: Vec<Category> = read_csv(&dir.join(CATEGORIES_FILE))?;
    let questions: Vec<Question> = read_csv(&dir.join(QUESTIONS_FILE))?;
    tracing::info!(
        categories = categories.len(),
        questions = questions.len(),
        "Importing from {}",
        dir.display()
    );
    import_categories(pool, categories)
        .await
        .context("Failed to import categories")?;
    import_questions(pool, questions)
        .await
        .context("Failed to import questions")
}
