//! # Quiz Play
//!
//! Request validation and question selection for a quiz round.

use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use thiserror::Error;

use crate::store::models::id_from_json;
use crate::store::{IdLiteral, Question};

/// Reasons a quiz request body is unusable
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("quiz body must be a JSON object")]
    NotAnObject,

    #[error("quiz_category must be an object with an id")]
    MissingCategory,

    #[error("quiz_category.id is not an integer: {0}")]
    InvalidCategoryId(String),

    #[error("previous_questions must be a list of question ids")]
    MissingPreviousQuestions,

    #[error("previous_questions[{0}] is not a question id")]
    InvalidPreviousQuestion(usize),
}

/// A validated quiz request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRound {
    /// Category to draw from; `None` when the id is beyond any row
    pub category: Option<i32>,

    /// Ids already shown in this quiz that a row could carry
    pub previous_questions: Vec<i32>,
}

impl QuizRound {
    /// Validate `{"previous_questions": [...], "quiz_category": {"id": ...}}`.
    ///
    /// Ids may be JSON integers or strings of digits. Extra fields on
    /// `quiz_category` (such as `type`) are ignored. Previous ids too large
    /// for any row are dropped.
    pub fn from_body(body: &Value) -> Result<Self, QuizError> {
        let body = body.as_object().ok_or(QuizError::NotAnObject)?;

        let category_id = body
            .get("quiz_category")
            .and_then(Value::as_object)
            .and_then(|category| category.get("id"))
            .ok_or(QuizError::MissingCategory)?;
        let category = id_from_json(category_id)
            .ok_or_else(|| QuizError::InvalidCategoryId(category_id.to_string()))?
            .known();

        let previous_questions = body
            .get("previous_questions")
            .and_then(Value::as_array)
            .ok_or(QuizError::MissingPreviousQuestions)?
            .iter()
            .enumerate()
            .map(|(i, id)| id_from_json(id).ok_or(QuizError::InvalidPreviousQuestion(i)))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .filter_map(IdLiteral::known)
            .collect();

        Ok(Self {
            category,
            previous_questions,
        })
    }
}

/// Pick one candidate uniformly at random. `None` means the quiz is over.
pub fn pick_question<'a, R>(candidates: &'a [Question], rng: &mut R) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    candidates.choose(rng)
}
