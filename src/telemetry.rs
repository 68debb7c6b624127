use prometheus::register_counter_vec;
use prometheus::register_int_counter;
use prometheus::{CounterVec, IntCounter};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref QUIZ_QUESTIONS_SERVED: CounterVec = register_counter_vec!(
        "quiz_questions_served_total",
        "Number of questions served in quiz mode",
        &["category"]
    )
    .unwrap();
    pub static ref QUIZZES_FINISHED: CounterVec = register_counter_vec!(
        "quizzes_finished_total",
        "Number of quiz requests that found no remaining question",
        &["category"]
    )
    .unwrap();
    pub static ref QUESTIONS_CREATED: IntCounter =
        register_int_counter!("questions_created_total", "Number of created questions").unwrap();
    pub static ref QUESTIONS_DELETED: IntCounter =
        register_int_counter!("questions_deleted_total", "Number of deleted questions").unwrap();
}

const DEFAULT_LEVEL: &str = "info";
// sqlx logs every statement at info
const QUIET_SQLX: &str = "sqlx=warn";

/// Filter directives for `LOG_LEVEL`. sqlx is held at warn unless the value names it.
fn log_directives(log_level: Option<&str>) -> String {
    let level = log_level
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LEVEL);
    if level.contains("sqlx") {
        level.to_owned()
    } else {
        format!("{level},{QUIET_SQLX}")
    }
}

pub fn init_tracing() {
    let mut fmt_layer = fmt::layer();
    if std::env::var("INCLUDE_SPAN_EVENTS").is_ok_and(|value| value.eq_ignore_ascii_case("true")) {
        fmt_layer = fmt_layer.with_span_events(FmtSpan::ENTER | FmtSpan::EXIT);
    }
    let log_level = std::env::var("LOG_LEVEL").ok();
    let filter_layer = EnvFilter::try_new(log_directives(log_level.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(log_directives(None)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    if let Some(level) = log_level.filter(|level| EnvFilter::try_new(level).is_err()) {
        tracing::warn!("Ignoring invalid LOG_LEVEL {level:?}");
    }
}
