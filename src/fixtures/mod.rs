//! Deterministic fixture data for the blog store.
//!
//! [`seed`] wipes the store, regenerates every author and post from the
//! configured seed, and returns the [`SeededStore`] the API is built from.
//! Seeding runs in a single transaction with each post inserted right after
//! its author.

mod generator;
mod words;

pub use generator::{AuthorFixture, FixtureGenerator, PostFixture};

use crate::config::FixtureSettings;
use crate::error::Result;
use crate::storage::{self, BlogStore, SeededStore};
use tracing::{debug, info};

pub async fn seed(store: BlogStore, settings: &FixtureSettings) -> Result<SeededStore> {
    let fixtures = FixtureGenerator::new(settings.seed).generate(settings.authors);

    let mut tx = store.pool().begin().await?;
    storage::reset_tables(&mut tx).await?;

    for fixture in &fixtures {
        let author =
            storage::insert_author(&mut tx, &fixture.first_name, &fixture.last_name).await?;
        let post =
            storage::insert_post(&mut tx, author.id, &fixture.post.title, &fixture.post.text)
                .await?;
        debug!(author_id = author.id, post_id = post.id, "seeded author");
    }

    tx.commit().await?;
    info!(
        seed = settings.seed,
        authors = fixtures.len(),
        posts = fixtures.len(),
        "Seeded blog store"
    );

    Ok(SeededStore::new(store))
}
