//! # Trivia HTTP Server Module
//!
//! HTTP API for the trivia game, served with Axum.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/categories` - Category listing and per-category questions
//! - `/questions`, `/question` - Listing, search, create and delete
//! - `/quizzes` - Random unseen question for quiz play

pub mod config;
pub mod errors;
pub mod health_routes;
pub mod pagination;
pub mod server;
pub mod trivia_routes;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::HttpServer;
