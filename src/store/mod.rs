//! # Trivia Store
//!
//! Persistence boundary for questions and categories.
//!
//! Handlers only ever see [`QuestionStore`]; the concrete store is picked at
//! boot time:
//!
//! - [`PgStore`] - PostgreSQL through a sqlx connection pool
//! - [`MemoryStore`] - in-process tables with the same constraints

pub mod errors;
pub mod memory;
pub mod models;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

pub use errors::{StoreError, StoreResult};
pub use memory::{MemoryStore, Seed};
pub use models::{parse_id, Category, IdLiteral, NewQuestion, Question};
pub use postgres::PgStore;

/// Store handle shared by all request handlers
pub type SharedStore = Arc<dyn QuestionStore>;

/// Read and write operations the HTTP layer needs.
///
/// Every list is ordered by id. Writes are atomic: a failed write leaves no
/// trace in the store.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// All categories
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    /// A single category, `None` if the id is unknown
    async fn category(&self, id: i32) -> StoreResult<Option<Category>>;

    /// All questions
    async fn questions(&self) -> StoreResult<Vec<Question>>;

    /// Questions whose category equals `category`
    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>>;

    /// Questions whose text contains `term` as a literal, case-sensitive substring
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Questions of `category` whose id is not listed in `exclude`
    async fn quiz_candidates(&self, category: i32, exclude: &[i32]) -> StoreResult<Vec<Question>>;

    /// Insert a question and return the stored row
    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question>;

    /// Delete a question. Returns `false` when no row had that id.
    async fn delete_question(&self, id: i32) -> StoreResult<bool>;
}
