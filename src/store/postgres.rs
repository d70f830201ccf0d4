//! # PostgreSQL Store
//!
//! `QuestionStore` over a sqlx connection pool. Each call draws one pooled
//! connection; writes run inside a transaction that is committed on success
//! and rolled back on any failure.
//!
//! # Table Schema
//!
//! Schema and seed data are managed outside this crate. The store expects:
//!
//! ```sql
//! CREATE TABLE categories (
//!     id SERIAL PRIMARY KEY,
//!     type TEXT NOT NULL
//! );
//!
//! CREATE TABLE questions (
//!     id SERIAL PRIMARY KEY,
//!     question TEXT NOT NULL,
//!     answer TEXT NOT NULL,
//!     category INTEGER NOT NULL REFERENCES categories (id),
//!     difficulty INTEGER NOT NULL
//! );
//! ```
//!
//! Substring search uses `strpos`, which is case-sensitive and treats the
//! term literally (no `LIKE` wildcards).

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, Transaction};

use super::errors::StoreResult;
use super::models::{Category, NewQuestion, Question};
use super::QuestionStore;

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Question store backed by PostgreSQL
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect a new pool to `url`
    pub async fn connect(url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        tracing::info!(max_connections, "PostgreSQL pool connected");

        Ok(Self { pool })
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn select_questions(&self, filter: &str) -> StoreResult<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions {} ORDER BY id",
            QUESTION_COLUMNS, filter
        );
        Ok(sqlx::query_as::<_, Question>(&sql)
            .fetch_all(&self.pool)
            .await?)
    }
}

/// Commit `tx` if `result` is ok, otherwise roll it back and return the error
async fn finish<T>(
    tx: Transaction<'static, Postgres>,
    result: Result<T, sqlx::Error>,
) -> StoreResult<T> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "transaction rollback failed");
            }
            Err(err.into())
        }
    }
}

#[async_trait]
impl QuestionStore for PgStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn category(&self, id: i32) -> StoreResult<Option<Category>> {
        Ok(
            sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        self.select_questions("").await
    }

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions WHERE category = $1 ORDER BY id",
            QUESTION_COLUMNS
        );
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions WHERE strpos(question, $1) > 0 ORDER BY id",
            QUESTION_COLUMNS
        );
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(term)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn quiz_candidates(&self, category: i32, exclude: &[i32]) -> StoreResult<Vec<Question>> {
        let sql = format!(
            "SELECT {} FROM questions WHERE category = $1 AND NOT (id = ANY($2)) ORDER BY id",
            QUESTION_COLUMNS
        );
        Ok(sqlx::query_as::<_, Question>(&sql)
            .bind(category)
            .bind(exclude)
            .fetch_all(&self.pool)
            .await?)
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let sql = format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            QUESTION_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let result = sqlx::query_as::<_, Question>(&sql)
            .bind(new.question)
            .bind(new.answer)
            .bind(new.category)
            .bind(new.difficulty)
            .fetch_one(&mut *tx)
            .await;

        finish(tx, result).await
    }

    async fn delete_question(&self, id: i32) -> StoreResult<bool> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map(|done| done.rows_affected() > 0);

        finish(tx, result).await
    }
}
