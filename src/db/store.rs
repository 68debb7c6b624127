use async_trait::async_trait;
use thiserror::Error;

use super::{Category, NewQuestion, Question};
use crate::trivia::search::{matching_questions, SearchError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,
    #[error("constraint violated: {0}")]
    Constraint(String),
    #[error("store unavailable")]
    Unavailable(#[source] sqlx::Error),
    #[error("unexpected store error")]
    Unexpected(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        let violation = match &error {
            sqlx::Error::Database(db)
                if db.is_foreign_key_violation()
                    || db.is_check_violation()
                    || db.is_unique_violation() =>
            {
                Some(db.message().to_owned())
            }
            _ => None,
        };
        if let Some(message) = violation {
            return StoreError::Constraint(message);
        }
        match error {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Unavailable(error),
            other => StoreError::Unexpected(other),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence for questions and categories.
///
/// Listings come back in id order so pages stay stable while the data is unchanged.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn all_categories(&self) -> StoreResult<Vec<Category>>;

    async fn all_questions(&self) -> StoreResult<Vec<Question>>;

    async fn question_by_id(&self, id: i64) -> StoreResult<Question>;

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring search over question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, SearchError> {
        if term.is_empty() {
            return Err(SearchError::MissingTerm);
        }
        let questions = self.all_questions().await?;
        matching_questions(questions, term)
    }

    /// Stores `question` and returns it with its assigned id.
    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question>;

    async fn delete_question(&self, id: i64) -> StoreResult<()>;
}
