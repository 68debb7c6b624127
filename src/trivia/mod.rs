//! Selection rules applied on top of the question store: paging, text search, quiz picks and
//! the category mapping.

pub mod categories;
pub mod pagination;
pub mod quiz;
pub mod search;

pub use categories::format_categories;
pub use pagination::{paginate, Page};
pub use quiz::{QuizCategory, QuizSession, QuizStep};
pub use search::matching_questions;
