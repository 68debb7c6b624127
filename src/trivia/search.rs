use thiserror::Error;

use crate::db::{Question, StoreError};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search term is missing or empty")]
    MissingTerm,
    #[error("no question matches {0:?}")]
    NoMatches(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Keeps the questions whose text contains `term`, ignoring case. Order is preserved.
pub fn matching_questions(
    questions: Vec<Question>,
    term: &str,
) -> Result<Vec<Question>, SearchError> {
    if term.is_empty() {
        return Err(SearchError::MissingTerm);
    }
    let needle = term.to_lowercase();
    let found: Vec<Question> = questions
        .into_iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .collect();
    if found.is_empty() {
        return Err(SearchError::NoMatches(term.to_owned()));
    }
    Ok(found)
}
