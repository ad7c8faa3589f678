//! # blogql - a GraphQL API over a seeded blog dataset
//!
//! Authors and their posts live in a local SQLite file that is wiped and
//! regenerated from a fixed seed at startup. The dataset is then served
//! read-only through a GraphQL endpoint whose relationship fields
//! (`Author.posts`, `Post.author`) are resolved on demand.
//!
//! ## Quick Start
//!
//! ```bash
//! # Seed ./blog.sqlite and serve on http://127.0.0.1:4000/
//! blogql
//!
//! # Query it
//! curl -s localhost:4000 -H 'content-type: application/json' \
//!   -d '{"query":"{ allAuthors { firstName posts { title } } }"}'
//! ```
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading (`blogql.toml`)
//! - [`error`]: Error types and result aliases
//! - [`fact`]: Outbound fact fetcher
//! - [`fixtures`]: Deterministic seeding
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (Author, Post)
//! - [`storage`]: SQLite store adapter

/// Configuration loading and management.
///
/// Handles the optional `blogql.toml` file and its defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BlogError` enum and `Result<T>` type alias.
pub mod error;

/// Outbound fact fetcher behind `Query.getFortuneCookie`.
pub mod fact;

/// Deterministic fixture generation and store seeding.
pub mod fixtures;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema, per-request loaders and the axum server.
pub mod graphql;

/// Tracing subscriber setup: stderr plus an optional JSON log file.
pub mod logging;

/// Data models for authors and posts.
pub mod model;

/// SQLite-backed storage layer.
pub mod storage;
