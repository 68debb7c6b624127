use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{
    db::{NewQuestion, Question},
    server::{
        app::{AppState, QuestionsPerPage, SharedStore},
        error::{ApiError, ApiJson, ApiPath, ApiQuery},
    },
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
    trivia::{format_categories, paginate, pagination::page_number},
};

use super::ApiResponse;

#[derive(Deserialize)]
struct NewQuestionBody {
    question: String,
    answer: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    difficulty: i64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    category: i64,
}

impl NewQuestionBody {
    fn validate(self) -> Result<NewQuestion, ApiError> {
        let question = self.question.trim();
        let answer = self.answer.trim();
        if question.is_empty() || answer.is_empty() {
            return Err(ApiError::Unprocessable(
                "question and answer must not be empty".to_owned(),
            ));
        }
        if self.difficulty < 1 {
            return Err(ApiError::Unprocessable(format!(
                "difficulty must be positive, got {}",
                self.difficulty
            )));
        }
        Ok(NewQuestion {
            question: question.to_owned(),
            answer: answer.to_owned(),
            category: self.category,
            difficulty: self.difficulty,
        })
    }
}

#[derive(Deserialize)]
struct SearchBody {
    #[serde(rename = "searchTerm", default)]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    current_page_total_questions: usize,
    total_questions: usize,
    current_category: &'static str,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct SingleQuestion {
    success: bool,
    id: i64,
    question: Question,
}

#[derive(Serialize)]
struct CreatedQuestion {
    success: bool,
    question: Question,
}

#[derive(Serialize)]
struct Deleted {
    success: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResults {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
    current_category: &'static str,
}

async fn list_questions(
    State(store): State<SharedStore>,
    State(QuestionsPerPage(page_size)): State<QuestionsPerPage>,
    ApiQuery(params): ApiQuery<Vec<(String, String)>>,
) -> ApiResponse<QuestionsPage> {
    let page = paginate(
        store.all_questions().await?,
        page_number(first_value(&params, "page")),
        page_size,
    );
    let categories = format_categories(store.all_categories().await?)?;
    Ok(Json(QuestionsPage {
        success: true,
        questions: page.items,
        current_page_total_questions: page.page_count,
        total_questions: page.total_count,
        current_category: "All",
        categories,
    }))
}

// raw pairs, so that repeated or junk `page` values fall back instead of rejecting
fn first_value<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

async fn get_question(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResponse<SingleQuestion> {
    let question = store.question_by_id(id).await?;
    Ok(Json(SingleQuestion {
        success: true,
        id,
        question,
    }))
}

async fn delete_question(
    State(store): State<SharedStore>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResponse<Deleted> {
    store.delete_question(id).await?;
    QUESTIONS_DELETED.inc();
    Ok(Json(Deleted { success: true }))
}

async fn create_question(
    State(store): State<SharedStore>,
    ApiJson(body): ApiJson<NewQuestionBody>,
) -> ApiResponse<CreatedQuestion> {
    let question = store.insert_question(body.validate()?).await?;
    QUESTIONS_CREATED.inc();
    Ok(Json(CreatedQuestion {
        success: true,
        question,
    }))
}

async fn search_questions(
    State(store): State<SharedStore>,
    ApiJson(body): ApiJson<SearchBody>,
) -> ApiResponse<SearchResults> {
    let term = body.search_term.unwrap_or_default();
    let questions = store.search_questions(&term).await?;
    Ok(Json(SearchResults {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: "all",
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", get(get_question).delete(delete_question))
        .route("/search", post(search_questions))
        .with_state(state)
}
