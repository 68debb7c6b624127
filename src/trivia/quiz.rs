use std::collections::BTreeSet;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::db::Question;

/// Category id clients send to play across every category.
pub const ANY_CATEGORY: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCategory {
    Any,
    Only(i64),
}

impl QuizCategory {
    pub fn from_id(id: i64) -> Self {
        if id == ANY_CATEGORY {
            QuizCategory::Any
        } else {
            QuizCategory::Only(id)
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            QuizCategory::Any => ANY_CATEGORY,
            QuizCategory::Only(id) => *id,
        }
    }

    pub fn admits(&self, question: &Question) -> bool {
        match self {
            QuizCategory::Any => true,
            QuizCategory::Only(id) => question.category == *id,
        }
    }
}

/// Client-held quiz progress. Nothing about a session lives on the server; every request
/// carries the whole state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pub category: QuizCategory,
    pub answered: BTreeSet<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizStep {
    Next(Question),
    Finished,
}

impl QuizSession {
    pub fn new(category: QuizCategory) -> Self {
        Self {
            category,
            answered: BTreeSet::new(),
        }
    }

    pub fn with_answered(category: QuizCategory, answered: impl IntoIterator<Item = i64>) -> Self {
        Self {
            category,
            answered: answered.into_iter().collect(),
        }
    }

    /// Records `id` as answered.
    pub fn answer(&mut self, id: i64) {
        self.answered.insert(id);
    }

    /// Questions from `candidates` still playable in this session.
    pub fn remaining<'a>(&self, candidates: &'a [Question]) -> Vec<&'a Question> {
        candidates
            .iter()
            .filter(|q| self.category.admits(q) && !self.answered.contains(&q.id))
            .collect()
    }

    /// Picks one remaining question uniformly at random, or reports the quiz as finished.
    pub fn next_question<R: Rng + ?Sized>(&self, candidates: &[Question], rng: &mut R) -> QuizStep {
        match self.remaining(candidates).choose(rng) {
            Some(question) => QuizStep::Next((*question).clone()),
            None => QuizStep::Finished,
        }
    }
}
