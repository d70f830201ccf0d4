//! Shared helpers for HTTP-level tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use trivia::http_server::HttpServer;
use trivia::store::{Category, MemoryStore, Question, SharedStore, Seed};

pub fn question(id: i32, text: &str, category: i32) -> Question {
    Question {
        id,
        question: text.to_string(),
        answer: format!("answer {}", id),
        category,
        difficulty: 1,
    }
}

/// Categories `{1: Science, 2: Art}` with questions 1 and 2 in Science and 3 in Art
pub fn scenario_seed() -> Seed {
    Seed {
        categories: vec![Category::new(1, "Science"), Category::new(2, "Art")],
        questions: vec![
            question(1, "What is the heaviest organ in the human body?", 1),
            question(2, "Who discovered penicillin?", 1),
            question(3, "Which Dutch graphic artist was born in 1898?", 2),
        ],
    }
}

/// Science category holding `count` questions with ids `1..=count`
pub fn bulk_seed(count: i32) -> Seed {
    Seed {
        categories: vec![Category::new(1, "Science")],
        questions: (1..=count)
            .map(|id| question(id, &format!("Question number {}", id), 1))
            .collect(),
    }
}

pub fn memory_store(seed: Seed) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::from_seed(seed).unwrap())
}

pub fn app(store: SharedStore) -> Router {
    HttpServer::new(store).router()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    post_raw(uri, &body.to_string())
}

pub fn post_raw(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request; an empty body is returned as `Value::Null`
pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

pub fn ids(body: &Value) -> Vec<i64> {
    body["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
