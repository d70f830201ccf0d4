//! Observability for the trivia API
//!
//! Logging goes through `tracing`. Per-request spans come from the
//! `tower-http` trace layer installed by the HTTP server.

mod logging;

pub use logging::{init_logging, is_valid_level};
