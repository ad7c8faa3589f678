use std::sync::Arc;

use async_graphql::dataloader::DataLoader;
use async_graphql::{
    ComplexObject, Context, EmptyMutation, EmptySubscription, ErrorExtensions, Object, Request,
    Response, Schema,
};
use tracing::debug;

use crate::config::RelationLoading;
use crate::error::BlogError;
use crate::fact::FactSource;
use crate::model::{AuthorFilter, PostFilter};
use crate::storage::SeededStore;

use super::loaders::{self, AuthorLoader, PostsByAuthorLoader};
use super::types::*;

pub type BlogSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct AppState {
    pub store: SeededStore,
    pub facts: Arc<dyn FactSource>,
}

/// The executable API: schema plus the per-request setup it needs.
#[derive(Clone)]
pub struct BlogApi {
    schema: BlogSchema,
    store: SeededStore,
    relations: RelationLoading,
}

impl BlogApi {
    pub fn schema(&self) -> &BlogSchema {
        &self.schema
    }

    pub fn relations(&self) -> RelationLoading {
        self.relations
    }

    pub async fn execute(&self, request: impl Into<Request>) -> Response {
        let request = match self.relations {
            RelationLoading::Batched => loaders::attach(request.into(), &self.store),
            RelationLoading::Lazy => request.into(),
        };
        self.schema.execute(request).await
    }
}

pub fn build_schema(
    store: SeededStore,
    facts: Arc<dyn FactSource>,
    relations: RelationLoading,
) -> BlogApi {
    let state = Arc::new(AppState {
        store: store.clone(),
        facts,
    });

    let schema = Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(state)
        .finish();

    BlogApi {
        schema,
        store,
        relations,
    }
}

fn get_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<AppState>> {
    ctx.data::<Arc<AppState>>()
}

fn field_error(e: BlogError) -> async_graphql::Error {
    e.extend()
}

/// Record a failed nullable field as an error entry and resolve it to `null`,
/// keeping the key in `data`.
fn null_on_error<T>(ctx: &Context<'_>, result: async_graphql::Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let err = ctx.set_error_path(err.into_server_error(ctx.item.pos));
            ctx.add_error(err);
            None
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn hello(&self) -> String {
        "Hello world!".to_string()
    }

    async fn test(&self) -> String {
        "test string".to_string()
    }

    /// First author matching both names exactly, or null
    async fn author(
        &self,
        ctx: &Context<'_>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> async_graphql::Result<Option<Author>> {
        debug!(?first_name, ?last_name, "Query.author");
        let state = get_state(ctx)?;
        let filter = AuthorFilter {
            first_name,
            last_name,
        };
        let author = state.store.find_author(&filter).await.map_err(field_error);
        Ok(null_on_error(ctx, author).flatten().map(Author::from))
    }

    async fn all_authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Author>>> {
        let state = get_state(ctx)?;
        let authors = state.store.find_all_authors().await.map_err(field_error);
        Ok(null_on_error(ctx, authors)
            .map(|authors| authors.into_iter().map(Author::from).collect()))
    }

    /// All posts, or the posts of one author
    async fn posts(
        &self,
        ctx: &Context<'_>,
        author_id: Option<i64>,
    ) -> async_graphql::Result<Option<Vec<Post>>> {
        debug!(?author_id, "Query.posts");
        let state = get_state(ctx)?;
        let posts = state
            .store
            .find_posts(PostFilter { author_id })
            .await
            .map_err(field_error);
        Ok(null_on_error(ctx, posts).map(|posts| posts.into_iter().map(Post::from).collect()))
    }

    async fn get_fortune_cookie(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<String>> {
        let state = get_state(ctx)?;
        let fact = state.facts.fetch_fact().await.map_err(field_error);
        Ok(null_on_error(ctx, fact))
    }
}

#[ComplexObject]
impl Author {
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Vec<Post>>> {
        debug!(author_id = self.id, "Author.posts");
        let posts = match ctx.data_opt::<DataLoader<PostsByAuthorLoader>>() {
            Some(loader) => loader
                .load_one(self.id)
                .await
                .map(Option::unwrap_or_default)
                .map_err(|e| e.as_ref().extend()),
            None => get_state(ctx)?
                .store
                .get_posts_for_author(self.id)
                .await
                .map_err(field_error),
        };
        Ok(null_on_error(ctx, posts).map(|posts| posts.into_iter().map(Post::from).collect()))
    }
}

#[ComplexObject]
impl Post {
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        debug!(post_id = self.id, author_id = self.author_id, "Post.author");
        let author = match ctx.data_opt::<DataLoader<AuthorLoader>>() {
            Some(loader) => loader
                .load_one(self.author_id)
                .await
                .map_err(|e| e.as_ref().extend())
                .and_then(|author| {
                    author.ok_or_else(|| field_error(BlogError::author_not_found(self.author_id)))
                }),
            None => get_state(ctx)?
                .store
                .get_author_for_post(self.author_id)
                .await
                .map_err(field_error),
        };
        Ok(null_on_error(ctx, author).map(Author::from))
    }
}
