//! GraphQL schema and resolvers for the blog API.
//!
//! ## Usage
//!
//! ```graphql
//! {
//!   allAuthors {
//!     firstName
//!     posts { title }
//!   }
//!   posts(authorId: 3) { author { id } }
//! }
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `hello`, `test`, `author`, `allAuthors`, `posts`, `getFortuneCookie`
//! - **Relationship fields**: `Author.posts`, `Post.author`, resolved only when requested
//!
//! Relationship fields either hit the store once per parent object or go through
//! per-request loaders, depending on [`RelationLoading`](crate::config::RelationLoading).

mod loaders;
mod schema;
mod server;
mod types;

pub use schema::{AppState, BlogApi, BlogSchema, QueryRoot, build_schema};
pub use server::{bind, router, run_server};
pub use types::*;
