//! Data models for the blog dataset.
//!
//! - [`Author`]: a person who writes posts
//! - [`Post`]: an article owned by exactly one author through `author_id`
//! - [`AuthorFilter`], [`PostFilter`]: finder arguments for the store

mod author;
mod post;

pub use author::{Author, AuthorFilter};
pub use post::{Post, PostFilter};
