use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::{
    db::Question,
    server::{
        app::{AppState, SharedStore},
        error::{ApiError, ApiPath},
    },
    trivia::format_categories,
};

use super::ApiResponse;

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryQuestionsBody {
    success: bool,
    current_category: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn get_categories(State(store): State<SharedStore>) -> ApiResponse<CategoriesBody> {
    let categories = format_categories(store.all_categories().await?)?;
    Ok(Json(CategoriesBody {
        success: true,
        categories,
    }))
}

async fn get_questions_by_category(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResponse<CategoryQuestionsBody> {
    let questions = store.questions_in_category(id).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound(format!("category {id} has no questions")));
    }
    Ok(Json(CategoryQuestionsBody {
        success: true,
        current_category: id,
        total_questions: questions.len(),
        questions,
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(get_questions_by_category))
        .with_state(state)
}
