//! trivia - HTTP backend for a trivia game
//!
//! Categories, paginated question listing, search, create/delete and
//! random-question quiz play over a relational store.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod quiz;
pub mod store;
