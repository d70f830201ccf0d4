//! Question and category records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::errors::{StoreError, StoreResult};

/// A stored trivia question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// A question category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: i32,

    /// Display name
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Column values for a question that has not been stored yet.
///
/// `None` is written as NULL; the store decides whether that is allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<i32>,
    pub difficulty: Option<i32>,
}

impl NewQuestion {
    /// Build column values from loosely typed JSON fields.
    ///
    /// Text columns take JSON strings. Integer columns take JSON integers or
    /// strings of ASCII digits. Anything else is a type mismatch.
    pub fn from_json(
        question: Option<&Value>,
        answer: Option<&Value>,
        category: Option<&Value>,
        difficulty: Option<&Value>,
    ) -> StoreResult<Self> {
        Ok(Self {
            question: text_column("question", question)?,
            answer: text_column("answer", answer)?,
            category: integer_column("category", category)?,
            difficulty: integer_column("difficulty", difficulty)?,
        })
    }
}

fn text_column(column: &'static str, value: Option<&Value>) -> StoreResult<Option<String>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(StoreError::type_mismatch(column, other)),
    }
}

fn integer_column(column: &'static str, value: Option<&Value>) -> StoreResult<Option<i32>> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(v) => id_from_json(v)
            .and_then(IdLiteral::known)
            .map(Some)
            .ok_or_else(|| StoreError::type_mismatch(column, v)),
    }
}

/// An id as a client wrote it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdLiteral {
    /// Fits the id column
    Known(i32),

    /// A well-formed integer that no row can carry
    OutOfRange,
}

impl IdLiteral {
    /// The id, when a row could have it
    pub fn known(self) -> Option<i32> {
        match self {
            IdLiteral::Known(id) => Some(id),
            IdLiteral::OutOfRange => None,
        }
    }
}

/// Parse an id from its textual form.
///
/// Only non-empty runs of ASCII digits are ids; signs, whitespace and other
/// characters are rejected. Digits beyond `i32` are [`IdLiteral::OutOfRange`].
pub fn parse_id(raw: &str) -> Option<IdLiteral> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse().map_or(IdLiteral::OutOfRange, IdLiteral::Known))
}

/// Read an id from a JSON integer or a string of digits
pub(crate) fn id_from_json(value: &Value) -> Option<IdLiteral> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(n) => Some(i32::try_from(n).map_or(IdLiteral::OutOfRange, IdLiteral::Known)),
            None if n.is_u64() => Some(IdLiteral::OutOfRange),
            None => None,
        },
        Value::String(s) => parse_id(s),
        _ => None,
    }
}
