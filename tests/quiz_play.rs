//! Quiz Play Tests
//!
//! `POST /quizzes` over the in-memory store:
//! - previously seen questions are never served again
//! - a pool is exhausted after each question was played once
//! - malformed bodies are unprocessable

mod common;

use std::collections::HashSet;

use axum::http::StatusCode;
use axum::Router;
use serde_json::{json, Value};

use common::*;

fn quiz_body(previous: &[i64], category: Value) -> Value {
    json!({
        "previous_questions": previous,
        "quiz_category": {"type": "Science", "id": category}
    })
}

async fn play(app: &Router, previous: &[i64], category: Value) -> (StatusCode, Value) {
    send(app, post_json("/quizzes", &quiz_body(previous, category))).await
}

// =============================================================================
// Selection
// =============================================================================

/// With question 1 already played, category 1 can only yield question 2.
#[tokio::test]
async fn test_play_quiz_skips_previous_question() {
    let app = app(memory_store(scenario_seed()));

    for _ in 0..20 {
        let (status, body) = play(&app, &[1], json!(1)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], 2);
        assert_eq!(body["question"]["category"], 1);
    }
}

#[tokio::test]
async fn test_play_quiz_returns_full_question() {
    let app = app(memory_store(scenario_seed()));

    let (status, body) = play(&app, &[], json!("2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["question"],
        json!({
            "id": 3,
            "question": "Which Dutch graphic artist was born in 1898?",
            "answer": "answer 3",
            "category": 2,
            "difficulty": 1
        })
    );
}

/// Feeding each answer back as a previous question walks the whole pool once.
#[tokio::test]
async fn test_play_quiz_exhausts_pool() {
    let app = app(memory_store(bulk_seed(8)));
    let mut previous: Vec<i64> = Vec::new();

    loop {
        let (status, body) = play(&app, &previous, json!(1)).await;
        assert_eq!(status, StatusCode::OK);

        match body["question"]["id"].as_i64() {
            Some(id) => {
                assert!(!previous.contains(&id), "question {} served twice", id);
                previous.push(id);
            }
            None => {
                assert!(body["question"].is_null());
                break;
            }
        }
    }

    let served: HashSet<i64> = previous.into_iter().collect();
    assert_eq!(served, (1..=8).collect::<HashSet<i64>>());
}

/// A category with nothing left ends the quiz instead of failing.
#[tokio::test]
async fn test_play_quiz_completed() {
    let app = app(memory_store(scenario_seed()));

    let (status, body) = play(&app, &[1, 2], json!(1)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"question": null}));
}

/// Ids too large for any row are well-formed; they simply match nothing.
#[tokio::test]
async fn test_play_quiz_oversized_ids() {
    let app = app(memory_store(scenario_seed()));

    for _ in 0..10 {
        let (status, body) = play(&app, &[99999999999, 1], json!(1)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["question"]["id"], 2);
    }

    let (status, body) = play(&app, &[], json!("99999999999")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"question": null}));
}

#[tokio::test]
async fn test_play_quiz_unknown_category_is_empty() {
    let app = app(memory_store(scenario_seed()));

    let (status, body) = play(&app, &[], json!(99)).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["question"].is_null());
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_play_quiz_null_previous_questions() {
    let app = app(memory_store(scenario_seed()));

    let body = json!({
        "previous_questions": null,
        "quiz_category": {"type": "Science", "id": "1"}
    });
    let (status, body) = send(&app, post_json("/quizzes", &body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body,
        json!({"success": false, "error": 422, "message": "Unprocessable error"})
    );
}

#[tokio::test]
async fn test_play_quiz_invalid_bodies() {
    let app = app(memory_store(scenario_seed()));

    let bodies = [
        json!({"previous_questions": []}),
        json!({"previous_questions": [], "quiz_category": null}),
        json!({"previous_questions": [], "quiz_category": "Science"}),
        json!({"previous_questions": [], "quiz_category": {"type": "Science"}}),
        json!({"previous_questions": [], "quiz_category": {"id": "abc"}}),
        json!({"previous_questions": "1,2", "quiz_category": {"id": 1}}),
        json!({"previous_questions": [1, null], "quiz_category": {"id": 1}}),
        json!([]),
    ];

    for body in bodies {
        let (status, _) = send(&app, post_json("/quizzes", &body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{}", body);
    }
}

#[tokio::test]
async fn test_play_quiz_malformed_json() {
    let app = app(memory_store(scenario_seed()));

    let (status, body) = send(&app, post_raw("/quizzes", "{\"previous_questions\": [")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], 422);
}
