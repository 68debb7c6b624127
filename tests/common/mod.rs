#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use trivia_api::config::Settings;
use sqlx::SqlitePool;
use trivia_api::db::{self, NewQuestion, Question, QuestionStore, SqliteStore};
use trivia_api::server::app::{build_router, AppState};

pub const CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

pub async fn empty_store() -> SqliteStore {
    let pool = db::in_memory().await.unwrap();
    db::run_migrations(&pool).await.unwrap();
    SqliteStore::new(pool)
}

pub async fn create_category(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO categories (name) VALUES (?1)")
        .bind(name)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub fn stored(new: NewQuestion, id: i64) -> Question {
    Question {
        id,
        question: new.question,
        answer: new.answer,
        category: new.category,
        difficulty: new.difficulty,
    }
}

pub async fn store_with_categories() -> SqliteStore {
    let store = empty_store().await;
    for name in CATEGORIES {
        create_category(store.pool(), name).await;
    }
    store
}

/// Adds `count` questions spread round-robin over the six categories.
pub async fn seed_questions(store: &SqliteStore, count: usize) {
    for n in 0..count {
        store
            .insert_question(NewQuestion {
                question: format!("Question number {n}?"),
                answer: format!("Answer {n}"),
                category: (n % CATEGORIES.len()) as i64 + 1,
                difficulty: (n % 5) as i64 + 1,
            })
            .await
            .unwrap();
    }
}

pub fn app(store: SqliteStore) -> Router {
    let mut settings = Settings::default();
    settings.quiz.seed = Some(7);
    build_router(AppState::new(Arc::new(store), &settings))
}

pub async fn seeded_app(questions: usize) -> Router {
    let store = store_with_categories().await;
    seed_questions(&store, questions).await;
    app(store)
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "unexpected non-json body {} with status {}",
                String::from_utf8_lossy(&bytes),
                status
            )
        })
    };
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}
