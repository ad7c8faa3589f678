#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use blogql::config::{FixtureSettings, RelationLoading};
use blogql::error::{BlogError, Result};
use blogql::fact::FactSource;
use blogql::fixtures;
use blogql::graphql::{BlogApi, build_schema};
use blogql::storage::{BlogStore, SeededStore};
use sqlx::ConnectOptions;
use sqlx::sqlite::SqliteConnectOptions;
use tempfile::TempDir;

pub struct StaticFact(pub &'static str);

#[async_trait]
impl FactSource for StaticFact {
    async fn fetch_fact(&self) -> Result<String> {
        Ok(self.0.to_string())
    }
}

pub struct FailingFact;

#[async_trait]
impl FactSource for FailingFact {
    async fn fetch_fact(&self) -> Result<String> {
        Err(BlogError::Fetch("connection refused".to_string()))
    }
}

/// Seed a throwaway store. Keep the `TempDir` alive for the duration of the test.
pub async fn seeded_store(seed: u64, authors: usize) -> (TempDir, SeededStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = BlogStore::open(&temp_dir.path().join("blog.sqlite"), 4)
        .await
        .unwrap();
    let store = fixtures::seed(store, &FixtureSettings { seed, authors })
        .await
        .unwrap();
    (temp_dir, store)
}

pub async fn api_with(
    relations: RelationLoading,
    facts: Arc<dyn FactSource>,
) -> (TempDir, BlogApi) {
    let (temp_dir, store) = seeded_store(123, 10).await;
    (temp_dir, build_schema(store, facts, relations))
}

pub async fn api(relations: RelationLoading) -> (TempDir, BlogApi) {
    api_with(relations, Arc::new(StaticFact("Cats sleep 16 hours a day."))).await
}

/// Write a post whose `author_id` matches no author, bypassing the foreign key.
pub async fn insert_orphan_post(dir: &TempDir, author_id: i64) {
    let mut conn = SqliteConnectOptions::new()
        .filename(dir.path().join("blog.sqlite"))
        .foreign_keys(false)
        .connect()
        .await
        .unwrap();
    sqlx::query("INSERT INTO posts (title, text, author_id) VALUES (?, ?, ?)")
        .bind("Orphaned post")
        .bind("Nobody wrote this.")
        .bind(author_id)
        .execute(&mut conn)
        .await
        .unwrap();
}

pub async fn api_with_orphan(relations: RelationLoading, author_id: i64) -> (TempDir, BlogApi) {
    let (temp_dir, store) = seeded_store(123, 10).await;
    insert_orphan_post(&temp_dir, author_id).await;
    let facts = Arc::new(StaticFact("Cats sleep 16 hours a day."));
    (temp_dir, build_schema(store, facts, relations))
}
