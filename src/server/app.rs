use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, HeaderValue, Method};
use axum::response::Response;
use axum::{extract::FromRef, http::StatusCode, routing::get, Json, Router};
use prometheus::{Encoder, TextEncoder};
use rand::rngs::StdRng;
use rand::SeedableRng;
use routes::{category_router, questions_router, quiz_router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::error::ApiError;
use super::routes;
use crate::config::Settings;
use crate::db::QuestionStore;

pub type SharedStore = Arc<dyn QuestionStore>;

/// Random source for quiz picks. The lock is only held for the pick itself.
#[derive(Clone)]
pub struct QuizRng(Arc<Mutex<StdRng>>);

impl QuizRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self(Arc::new(Mutex::new(rng)))
    }

    pub fn with<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }
}

#[derive(Clone, Copy)]
pub struct QuestionsPerPage(pub usize);

#[derive(FromRef, Clone)]
pub struct AppState {
    store: SharedStore,
    rng: QuizRng,
    page_size: QuestionsPerPage,
}

impl AppState {
    pub fn new(store: SharedStore, settings: &Settings) -> Self {
        Self {
            store,
            rng: QuizRng::new(settings.quiz.seed),
            page_size: QuestionsPerPage(settings.pagination.questions_per_page),
        }
    }
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(category_router(state.clone()))
        .merge(questions_router(state.clone()))
        .merge(quiz_router(state))
        .fallback(|| async {
            tracing::info!("Fallback");
            ApiError::NotFound("no such route".to_owned())
        })
        .method_not_allowed_fallback(|| async { ApiError::MethodNotAllowed })
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(store: SharedStore, settings: &Settings) -> anyhow::Result<()> {
    let addr = settings.server.address();
    let app = build_router(AppState::new(store, settings));
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Serving on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({ "success": true }))
}

async fn metrics() -> Result<Response, ApiError> {
    let encoder = TextEncoder::new();
    let metrics = prometheus::gather();
    let mut buf = vec![];
    encoder
        .encode(&metrics, &mut buf)
        .map_err(|e| ApiError::Internal(format!("Failed to encode metrics: {e}")))?;
    let content_type = HeaderValue::from_str(encoder.format_type())
        .map_err(|e| ApiError::Internal(format!("Bad metrics content type: {e}")))?;
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(buf))
        .map_err(|e| ApiError::Internal(format!("Failed to build metrics response: {e}")))
}
