use async_trait::async_trait;
use sqlx::SqlitePool;

use super::queries::{categories, questions};
use super::store::{QuestionStore, StoreError, StoreResult};
use super::{Category, NewQuestion, Question};

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl QuestionStore for SqliteStore {
    async fn all_categories(&self) -> StoreResult<Vec<Category>> {
        Ok(categories::get_all_categories(&self.pool).await?)
    }

    async fn all_questions(&self) -> StoreResult<Vec<Question>> {
        Ok(questions::get_all_questions(&self.pool).await?)
    }

    async fn question_by_id(&self, id: i64) -> StoreResult<Question> {
        questions::get_question_by_id(&self.pool, id)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        Ok(questions::get_questions_for_category(&self.pool, category).await?)
    }

    async fn insert_question(&self, question: NewQuestion) -> StoreResult<Question> {
        let created = questions::create_question(&self.pool, &question).await?;
        tracing::info!(id = created.id, category = created.category, "Question created");
        Ok(created)
    }

    async fn delete_question(&self, id: i64) -> StoreResult<()> {
        match questions::delete_question(&self.pool, id).await? {
            0 => Err(StoreError::NotFound),
            _ => {
                tracing::info!(id, "Question deleted");
                Ok(())
            }
        }
    }
}
