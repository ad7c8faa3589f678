use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;

use crate::config::ServerSettings;
use crate::error::Result;

use super::schema::BlogApi;

/// `GET /` serves GraphiQL, `POST /` executes queries.
pub fn router(api: BlogApi) -> Router {
    Router::new()
        .route("/", get(graphiql).post(graphql_handler))
        .with_state(Arc::new(api))
}

async fn graphql_handler(State(api): State<Arc<BlogApi>>, req: GraphQLRequest) -> GraphQLResponse {
    api.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

pub async fn bind(settings: &ServerSettings) -> Result<TcpListener> {
    let listener = TcpListener::bind((settings.host.as_str(), settings.port)).await?;
    Ok(listener)
}

pub async fn run_server(api: BlogApi, listener: TcpListener) -> Result<()> {
    axum::serve(listener, router(api)).await?;
    Ok(())
}
