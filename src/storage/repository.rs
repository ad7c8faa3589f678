use crate::{
    error::{BlogError, Result},
    model::{Author, AuthorFilter, Post, PostFilter},
};
use sqlx::{
    QueryBuilder, Sqlite, SqliteConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
};
use std::ops::Deref;
use std::path::Path;
use tracing::debug;

const SELECT_AUTHORS: &str = "SELECT id, first_name, last_name FROM authors";
const SELECT_POSTS: &str = "SELECT id, title, text, author_id FROM posts";

#[derive(Clone)]
pub struct BlogStore {
    pool: SqlitePool,
}

impl BlogStore {
    /// Open the SQLite file at `path`, creating it if missing.
    pub async fn open(path: &Path, max_connections: u32) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn find_all_authors(&self) -> Result<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(&format!("{SELECT_AUTHORS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    /// First author, in id order, matching every supplied name.
    pub async fn find_author(&self, filter: &AuthorFilter) -> Result<Option<Author>> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_AUTHORS);
        query.push(" WHERE 1 = 1");
        if let Some(ref first_name) = filter.first_name {
            query.push(" AND first_name = ").push_bind(first_name.clone());
        }
        if let Some(ref last_name) = filter.last_name {
            query.push(" AND last_name = ").push_bind(last_name.clone());
        }
        query.push(" ORDER BY id LIMIT 1");

        let author = query
            .build_query_as::<Author>()
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    /// All posts, or only those of `filter.author_id`. An unknown author yields an empty list.
    pub async fn find_posts(&self, filter: PostFilter) -> Result<Vec<Post>> {
        let mut query = QueryBuilder::<Sqlite>::new(SELECT_POSTS);
        if let Some(author_id) = filter.author_id {
            query.push(" WHERE author_id = ").push_bind(author_id);
        }
        query.push(" ORDER BY id");

        let posts = query.build_query_as::<Post>().fetch_all(&self.pool).await?;
        Ok(posts)
    }

    pub async fn get_posts_for_author(&self, author_id: i64) -> Result<Vec<Post>> {
        self.find_posts(PostFilter::by_author(author_id)).await
    }

    pub async fn get_author_for_post(&self, author_id: i64) -> Result<Author> {
        sqlx::query_as::<_, Author>(&format!("{SELECT_AUTHORS} WHERE id = ?"))
            .bind(author_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| BlogError::author_not_found(author_id))
    }

    pub async fn find_authors_by_ids(&self, ids: &[i64]) -> Result<Vec<Author>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        debug!(keys = ids.len(), "bulk author lookup");

        let mut query = QueryBuilder::<Sqlite>::new(SELECT_AUTHORS);
        query.push(" WHERE id IN (");
        let mut separated = query.separated(", ");
        for id in ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id");

        let authors = query
            .build_query_as::<Author>()
            .fetch_all(&self.pool)
            .await?;
        Ok(authors)
    }

    pub async fn find_posts_by_author_ids(&self, author_ids: &[i64]) -> Result<Vec<Post>> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }
        debug!(keys = author_ids.len(), "bulk post lookup");

        let mut query = QueryBuilder::<Sqlite>::new(SELECT_POSTS);
        query.push(" WHERE author_id IN (");
        let mut separated = query.separated(", ");
        for id in author_ids {
            separated.push_bind(*id);
        }
        separated.push_unseparated(") ORDER BY id");

        let posts = query.build_query_as::<Post>().fetch_all(&self.pool).await?;
        Ok(posts)
    }
}

/// A [`BlogStore`] whose seeding transaction has committed.
///
/// Only the fixture generator hands these out, so a schema built from one
/// never observes a half-seeded dataset.
#[derive(Clone)]
pub struct SeededStore {
    store: BlogStore,
}

impl SeededStore {
    pub(crate) fn new(store: BlogStore) -> Self {
        Self { store }
    }
}

impl Deref for SeededStore {
    type Target = BlogStore;

    fn deref(&self) -> &BlogStore {
        &self.store
    }
}

/// Drop and recreate both tables.
pub(crate) async fn reset_tables(conn: &mut SqliteConnection) -> Result<()> {
    sqlx::query("DROP TABLE IF EXISTS posts")
        .execute(&mut *conn)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS authors")
        .execute(&mut *conn)
        .await?;

    sqlx::query(
        "CREATE TABLE authors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL
        )",
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        "CREATE TABLE posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            text TEXT NOT NULL,
            author_id INTEGER NOT NULL REFERENCES authors(id)
        )",
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query("CREATE INDEX idx_posts_author_id ON posts(author_id)")
        .execute(&mut *conn)
        .await?;

    Ok(())
}

pub(crate) async fn insert_author(
    conn: &mut SqliteConnection,
    first_name: &str,
    last_name: &str,
) -> Result<Author> {
    let result = sqlx::query("INSERT INTO authors (first_name, last_name) VALUES (?, ?)")
        .bind(first_name)
        .bind(last_name)
        .execute(&mut *conn)
        .await?;

    Ok(Author {
        id: result.last_insert_rowid(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    })
}

pub(crate) async fn insert_post(
    conn: &mut SqliteConnection,
    author_id: i64,
    title: &str,
    text: &str,
) -> Result<Post> {
    let result = sqlx::query("INSERT INTO posts (title, text, author_id) VALUES (?, ?, ?)")
        .bind(title)
        .bind(text)
        .bind(author_id)
        .execute(&mut *conn)
        .await?;

    Ok(Post {
        id: result.last_insert_rowid(),
        title: title.to_string(),
        text: text.to_string(),
        author_id,
    })
}
