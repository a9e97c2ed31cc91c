use std::time::Instant;

use futures::{StreamExt, pin_mut};
use sea_orm::DatabaseConnection;
use tracing::{debug, info};

use crate::{
    error::MigrationResult,
    identity::{EntityKind, IdentityMap},
    loader::{self, LoadReport},
    relations::{RelationBuilder, Tables},
    source, transform,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub films_read: usize,
    pub loaded: LoadReport,
}

/// Extracts and reshapes the whole source catalog in memory.
pub async fn build_tables(
    source_db: &DatabaseConnection,
    identities: &mut IdentityMap,
) -> MigrationResult<Tables> {
    let writer_names = source::load_writer_names(source_db).await?;

    let movies = source::stream_movies(source_db).await?;
    pin_mut!(movies);

    let mut builder = RelationBuilder::new();
    let mut films_read = 0usize;
    while let Some(raw) = movies.next().await {
        let movie = transform::transform(raw?, &writer_names)?;
        debug!(source_id = %movie.source_id, title = %movie.title, "transformed film");
        builder.add(movie, identities);
        films_read += 1;
    }

    info!(
        films = films_read,
        people = identities.len(EntityKind::Person),
        genres = identities.len(EntityKind::Genre),
        "source catalog reshaped"
    );
    Ok(builder.finish())
}

/// Runs the migration end to end. Nothing is written until every film has
/// been transformed.
pub async fn run(
    source_db: &DatabaseConnection,
    target_db: &DatabaseConnection,
    batch_size: usize,
) -> MigrationResult<RunReport> {
    let started = Instant::now();
    let mut identities = IdentityMap::new();

    let tables = build_tables(source_db, &mut identities).await?;
    let films_read = tables.film_work.len();

    let loaded = loader::load(target_db, &tables, batch_size).await?;

    info!(elapsed_ms = started.elapsed().as_millis() as u64, ?loaded, "migration complete");
    Ok(RunReport { films_read, loaded })
}
