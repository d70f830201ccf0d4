//! Trivia HTTP Routes
//!
//! Endpoints for browsing, administering and playing the trivia game.

use std::collections::BTreeMap;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::{ApiError, ApiResult};
use super::pagination::{page_window, parse_page, QUESTIONS_PER_PAGE};
use crate::quiz::{pick_question, QuizRound};
use crate::store::{parse_id, Category, IdLiteral, NewQuestion, Question, SharedStore};

// ==================
// Request/Response Types
// ==================

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<i32, String>,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionPageResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: BTreeMap<i32, String>,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<Question>,
    pub total_questions: usize,
    #[serde(rename = "currentCategory")]
    pub current_category: Option<String>,
}

impl QuestionListResponse {
    fn new(questions: Vec<Question>, current_category: Option<String>) -> Self {
        Self {
            total_questions: questions.len(),
            questions,
            current_category,
        }
    }
}

/// Body of `POST /question`. Fields stay loosely typed until the store
/// coerces them.
#[derive(Debug, Default, Deserialize)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    pub question: Option<Value>,
    #[serde(default)]
    pub answer: Option<Value>,
    #[serde(default)]
    pub difficulty: Option<Value>,
    #[serde(default)]
    pub category: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "searchTerm")]
    pub search_term: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuizResponse {
    /// `None` once every question of the category has been played
    pub question: Option<Question>,
}

// ==================
// Trivia Routes
// ==================

/// Create trivia routes
pub fn trivia_routes(store: SharedStore) -> Router {
    Router::new()
        .route("/categories", get(list_categories_handler))
        .route(
            "/categories/:category_id/questions",
            get(category_questions_handler),
        )
        .route(
            "/questions",
            get(list_questions_handler).post(search_questions_handler),
        )
        .route("/questions/:question_id", delete(delete_question_handler))
        .route("/question", post(create_question_handler))
        .route("/quizzes", post(play_quiz_handler))
        .with_state(store)
}

// ==================
// Helper Functions
// ==================

fn category_map(categories: Vec<Category>) -> BTreeMap<i32, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}

/// `Ok(None)` for digit strings too large for any row
fn path_id(raw: &str, what: &str) -> ApiResult<Option<i32>> {
    parse_id(raw)
        .map(IdLiteral::known)
        .ok_or_else(|| ApiError::BadRequest(format!("{} id must be numeric: {:?}", what, raw)))
}

// ==================
// Category Handlers
// ==================

async fn list_categories_handler(
    State(store): State<SharedStore>,
) -> ApiResult<Json<CategoriesResponse>> {
    let categories = store.categories().await?;

    Ok(Json(CategoriesResponse {
        categories: category_map(categories),
    }))
}

async fn category_questions_handler(
    State(store): State<SharedStore>,
    Path(category_id): Path<String>,
) -> ApiResult<Json<QuestionListResponse>> {
    let id = path_id(&category_id, "category")?.ok_or(ApiError::NotFound)?;

    let category = store.category(id).await?.ok_or(ApiError::NotFound)?;
    let questions = store.questions_in_category(id).await?;

    Ok(Json(QuestionListResponse::new(questions, Some(category.kind))))
}

// ==================
// Question Handlers
// ==================

async fn list_questions_handler(
    State(store): State<SharedStore>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Json<QuestionPageResponse>> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let page = parse_page(query.page.as_deref()).ok_or_else(|| {
        ApiError::BadRequest(format!("page must be an integer >= 1: {:?}", query.page))
    })?;

    let questions = store.questions().await?;
    let window = page_window(&questions, page, QUESTIONS_PER_PAGE);
    if window.is_empty() {
        return Err(ApiError::NotFound);
    }
    let window = window.to_vec();

    let categories = store.categories().await?;

    Ok(Json(QuestionPageResponse {
        questions: window,
        total_questions: questions.len(),
        categories: category_map(categories),
        current_category: None,
    }))
}

async fn delete_question_handler(
    State(store): State<SharedStore>,
    Path(question_id): Path<String>,
) -> ApiResult<StatusCode> {
    let Some(id) = path_id(&question_id, "question")? else {
        tracing::debug!(question_id = %question_id, "question id beyond any row");
        return Ok(StatusCode::NO_CONTENT);
    };

    let deleted = store.delete_question(id).await?;
    tracing::info!(question_id = id, deleted, "question delete committed");

    Ok(StatusCode::NO_CONTENT)
}

async fn create_question_handler(
    State(store): State<SharedStore>,
    body: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;

    let new = NewQuestion::from_json(
        request.question.as_ref(),
        request.answer.as_ref(),
        request.category.as_ref(),
        request.difficulty.as_ref(),
    )?;
    let stored = store.insert_question(new).await?;
    tracing::info!(
        question_id = stored.id,
        category = stored.category,
        "question created"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Absent or null `searchTerm` matches nothing
async fn search_questions_handler(
    State(store): State<SharedStore>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<QuestionListResponse>> {
    let Json(request) = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let term = request.search_term.ok_or(ApiError::NotFound)?;

    let questions = store.search_questions(&term).await?;
    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(Json(QuestionListResponse::new(questions, None)))
}

// ==================
// Quiz Handlers
// ==================

async fn play_quiz_handler(
    State(store): State<SharedStore>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<QuizResponse>> {
    let Json(body) = body.map_err(|e| ApiError::Unprocessable(e.body_text()))?;
    let round = QuizRound::from_body(&body)?;

    let candidates = match round.category {
        Some(category) => store.quiz_candidates(category, &round.previous_questions).await?,
        None => Vec::new(),
    };
    let question = pick_question(&candidates, &mut rand::thread_rng()).cloned();

    if question.is_none() {
        tracing::debug!(category = ?round.category, "quiz pool exhausted");
    }

    Ok(Json(QuizResponse { question }))
}
