//! Per-request batching for relationship fields.
//!
//! Each loader collects the keys requested at one resolution depth and turns
//! them into a single bulk store call. Loaders live for one request only.

use std::collections::HashMap;
use std::sync::Arc;

use async_graphql::Request;
use async_graphql::dataloader::{DataLoader, Loader};

use crate::error::BlogError;
use crate::model::{Author, Post};
use crate::storage::SeededStore;

/// `Post.author`: author id -> author.
pub struct AuthorLoader {
    store: SeededStore,
}

impl Loader<i64> for AuthorLoader {
    type Value = Author;
    type Error = Arc<BlogError>;

    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Author>, Self::Error> {
        let authors = self.store.find_authors_by_ids(keys).await.map_err(Arc::new)?;
        Ok(authors.into_iter().map(|a| (a.id, a)).collect())
    }
}

/// `Author.posts`: author id -> that author's posts.
pub struct PostsByAuthorLoader {
    store: SeededStore,
}

impl Loader<i64> for PostsByAuthorLoader {
    type Value = Vec<Post>;
    type Error = Arc<BlogError>;

    async fn load(&self, keys: &[i64]) -> Result<HashMap<i64, Vec<Post>>, Self::Error> {
        let posts = self
            .store
            .find_posts_by_author_ids(keys)
            .await
            .map_err(Arc::new)?;

        let mut by_author: HashMap<i64, Vec<Post>> = HashMap::new();
        for post in posts {
            by_author.entry(post.author_id).or_default().push(post);
        }
        Ok(by_author)
    }
}

/// Attach a fresh set of loaders to `request`.
pub fn attach(request: Request, store: &SeededStore) -> Request {
    request
        .data(DataLoader::new(
            AuthorLoader {
                store: store.clone(),
            },
            tokio::spawn,
        ))
        .data(DataLoader::new(
            PostsByAuthorLoader {
                store: store.clone(),
            },
            tokio::spawn,
        ))
}
