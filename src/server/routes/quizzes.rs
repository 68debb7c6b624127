use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{
    db::Question,
    server::{
        app::{AppState, QuizRng, SharedStore},
        deserializers::deserialize_ids,
        error::ApiJson,
    },
    telemetry::{QUIZZES_FINISHED, QUIZ_QUESTIONS_SERVED},
    trivia::{QuizCategory, QuizSession, QuizStep},
};

use super::ApiResponse;

const UNKNOWN_CATEGORY_LABEL: &str = "unknown";

#[derive(Deserialize)]
struct QuizCategoryBody {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default, deserialize_with = "deserialize_ids")]
    previous_questions: Vec<i64>,
    quiz_category: QuizCategoryBody,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    question: Option<Question>,
    finished: bool,
}

async fn next_question(
    State(store): State<SharedStore>,
    State(rng): State<QuizRng>,
    ApiJson(request): ApiJson<QuizRequest>,
) -> ApiResponse<QuizResponse> {
    let category = QuizCategory::from_id(request.quiz_category.id);
    let candidates = match category {
        QuizCategory::Any => store.all_questions().await?,
        QuizCategory::Only(id) => store.questions_in_category(id).await?,
    };
    let session = QuizSession::with_answered(category, request.previous_questions);
    let step = rng.with(|rng| session.next_question(&candidates, rng));

    let label = category_label(category, &candidates);
    let response = match step {
        QuizStep::Next(question) => {
            QUIZ_QUESTIONS_SERVED
                .with_label_values(&[label.as_str()])
                .inc();
            QuizResponse {
                success: true,
                question: Some(question),
                finished: false,
            }
        }
        QuizStep::Finished => {
            tracing::debug!(
                category = category.id(),
                answered = session.answered.len(),
                "Quiz finished"
            );
            QUIZZES_FINISHED.with_label_values(&[label.as_str()]).inc();
            QuizResponse {
                success: true,
                question: None,
                finished: true,
            }
        }
    };
    Ok(Json(response))
}

/// Metric label for a quiz category. Ids with no questions share one label so that clients
/// cannot mint new series.
fn category_label(category: QuizCategory, candidates: &[Question]) -> String {
    if candidates.is_empty() {
        UNKNOWN_CATEGORY_LABEL.to_owned()
    } else {
        category.id().to_string()
    }
}

pub fn quiz_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn categories_without_questions_share_a_label() {
        assert_eq!(category_label(QuizCategory::Only(9001), &[]), "unknown");
        assert_eq!(category_label(QuizCategory::Only(-3), &[]), "unknown");
        assert_eq!(category_label(QuizCategory::Any, &[]), "unknown");
    }

    #[test]
    fn known_categories_are_labelled_by_id() {
        assert_eq!(
            category_label(QuizCategory::Only(2), &[question(1, 2)]),
            "2"
        );
        assert_eq!(category_label(QuizCategory::Any, &[question(1, 2)]), "0");
    }
}
