//! SQLite-backed storage for the blog dataset.
//!
//! The store is written once by the fixture generator and read-only afterwards.
//!
//! ## Tables
//!
//! ```sql
//! authors (id INTEGER PRIMARY KEY, first_name TEXT, last_name TEXT)
//! posts   (id INTEGER PRIMARY KEY, title TEXT, text TEXT,
//!          author_id INTEGER REFERENCES authors(id))
//! ```
//!
//! ## Components
//!
//! - [`BlogStore`]: connection pool plus the typed finder operations
//! - [`SeededStore`]: a store that has finished seeding and may be served

mod repository;

pub(crate) use repository::{insert_author, insert_post, reset_tables};
pub use repository::{BlogStore, SeededStore};
