use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use blogql::config::BlogConfig;
use blogql::fact::{self, HttpFactSource};
use blogql::fixtures;
use blogql::graphql::{self, build_schema};
use blogql::logging;
use blogql::storage::BlogStore;

#[tokio::main]
async fn main() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, root) =
        BlogConfig::discover(&cwd).context("Failed to load blogql configuration")?;

    logging::init(config.logging.verbose, config.log_path(&root).as_deref())
        .context("Failed to initialize logging")?;
    fact::install_crypto_provider();

    let store_path = config.store_path(&root);
    let store = BlogStore::open(&store_path, config.store.max_connections)
        .await
        .with_context(|| format!("Failed to open store at {}", store_path.display()))?;

    // Serving starts only after seeding has committed
    let store = fixtures::seed(store, &config.fixtures)
        .await
        .context("Failed to seed blog store")?;

    let facts = Arc::new(HttpFactSource::new(config.fact.url.clone())?);
    let api = build_schema(store, facts, config.graphql.relations);

    let listener = graphql::bind(&config.server)
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.server.host, config.server.port))?;
    let addr = listener.local_addr()?;
    info!(relations = ?api.relations(), "Server ready at http://{}/", addr);

    graphql::run_server(api, listener).await?;
    Ok(())
}
