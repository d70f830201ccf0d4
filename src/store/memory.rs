//! # In-Memory Store
//!
//! Holds both tables in process memory. Enforces the constraints the
//! PostgreSQL schema declares (NOT NULL columns, category foreign key) so
//! the HTTP layer behaves the same on either store.
//!
//! Writes validate the whole row before touching the tables, so a rejected
//! write never leaves a partial row behind.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use super::models::{Category, NewQuestion, Question};
use super::QuestionStore;

/// Categories every fresh trivia database starts with
const STANDARD_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

/// Initial table contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Seed {
    /// The six standard categories, no questions
    pub fn standard() -> Self {
        Self {
            categories: STANDARD_CATEGORIES
                .iter()
                .zip(1..)
                .map(|(kind, id)| Category::new(id, *kind))
                .collect(),
            questions: Vec::new(),
        }
    }

    /// Read a seed from a JSON file
    pub fn from_file(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::InvalidSeed(format!("failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content)
            .map_err(|e| StoreError::InvalidSeed(format!("{}: {}", path.display(), e)))
    }
}

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    /// `None` once the id column has no values left
    next_question_id: Option<i32>,
}

impl Tables {
    fn questions_where<F>(&self, predicate: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        self.questions
            .values()
            .filter(|q| predicate(q))
            .cloned()
            .collect()
    }

    /// Check a row against the table constraints and return it complete
    fn validate(&self, new: NewQuestion) -> StoreResult<Question> {
        let question = new.question.ok_or(StoreError::NotNull("question"))?;
        let answer = new.answer.ok_or(StoreError::NotNull("answer"))?;
        let category = new.category.ok_or(StoreError::NotNull("category"))?;
        let difficulty = new.difficulty.ok_or(StoreError::NotNull("difficulty"))?;

        if !self.categories.contains_key(&category) {
            return Err(StoreError::ForeignKey(category));
        }
        let id = self.next_question_id.ok_or(StoreError::IdsExhausted)?;

        Ok(Question {
            id,
            question,
            answer,
            category,
            difficulty,
        })
    }
}

/// Question store backed by in-process tables
#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create a store with no categories and no questions
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                next_question_id: Some(1),
                ..Default::default()
            }),
        }
    }

    /// Create a store from seed data.
    ///
    /// Fails if a seeded question references a category the seed does not
    /// define. New questions get ids above the highest seeded id.
    pub fn from_seed(seed: Seed) -> StoreResult<Self> {
        let mut tables = Tables::default();

        for category in seed.categories {
            tables.categories.insert(category.id, category);
        }

        for question in seed.questions {
            if !tables.categories.contains_key(&question.category) {
                return Err(StoreError::InvalidSeed(format!(
                    "question {} references unknown category {}",
                    question.id, question.category
                )));
            }
            tables.questions.insert(question.id, question);
        }

        tables.next_question_id = tables
            .questions
            .keys()
            .next_back()
            .map_or(Some(1), |max| max.checked_add(1));

        Ok(Self {
            tables: RwLock::new(tables),
        })
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.tables
            .read()
            .map_err(|_| StoreError::Unavailable("table lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.tables
            .write()
            .map_err(|_| StoreError::Unavailable("table lock poisoned".to_string()))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.values().cloned().collect())
    }

    async fn category(&self, id: i32) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.get(&id).cloned())
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.questions.values().cloned().collect())
    }

    async fn questions_in_category(&self, category: i32) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.questions_where(|q| q.category == category))
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.questions_where(|q| q.question.contains(term)))
    }

    async fn quiz_candidates(&self, category: i32, exclude: &[i32]) -> StoreResult<Vec<Question>> {
        Ok(self
            .read()?
            .questions_where(|q| q.category == category && !exclude.contains(&q.id)))
    }

    async fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.write()?;
        let question = tables.validate(new)?;

        tables.next_question_id = question.id.checked_add(1);
        tables.questions.insert(question.id, question.clone());

        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> StoreResult<bool> {
        Ok(self.write()?.questions.remove(&id).is_some())
    }
}
