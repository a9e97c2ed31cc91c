use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    TransactionTrait, sea_query::OnConflict,
};
use tracing::{info, warn};

use crate::{
    entities::{film_work, genre, genre_film_work, person, person_film_work},
    error::{MigrationError, MigrationResult},
    relations::Tables,
};

/// Rows actually written per table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub film_work: u64,
    pub genre: u64,
    pub person: u64,
    pub person_film_work: u64,
    pub genre_film_work: u64,
}

/// Writes every table inside one transaction, entity tables before the
/// junction tables that reference them.
pub async fn load(
    db: &DatabaseConnection,
    tables: &Tables,
    batch_size: usize,
) -> MigrationResult<LoadReport> {
    let txn = db.begin().await.map_err(MigrationError::write("transaction"))?;
    let report = load_tables(&txn, tables, batch_size).await?;
    txn.commit().await.map_err(MigrationError::write("transaction"))?;
    Ok(report)
}

pub async fn load_tables<C: ConnectionTrait>(
    db: &C,
    tables: &Tables,
    batch_size: usize,
) -> MigrationResult<LoadReport> {
    let film_work = insert_batches(
        db,
        "film_work",
        tables.film_work.iter().cloned().map(film_work::ActiveModel::from),
        batch_size,
        None,
    )
    .await?;

    let genre = insert_batches(
        db,
        "genre",
        tables.genre.iter().cloned().map(genre::ActiveModel::from),
        batch_size,
        None,
    )
    .await?;

    let person = insert_batches(
        db,
        "person",
        tables.person.iter().cloned().map(person::ActiveModel::from),
        batch_size,
        None,
    )
    .await?;

    let person_film_work = load_person_film_work(db, &tables.person_film_work, batch_size).await?;

    let genre_film_work = insert_batches(
        db,
        "genre_film_work",
        tables.genre_film_work.iter().cloned().map(genre_film_work::ActiveModel::from),
        batch_size,
        None,
    )
    .await?;

    Ok(LoadReport { film_work, genre, person, person_film_work, genre_film_work })
}

/// The only table written with ignore-on-duplicate semantics, keyed on
/// (film_work_id, person_id, role).
pub async fn load_person_film_work<C: ConnectionTrait>(
    db: &C,
    rows: &[person_film_work::Model],
    batch_size: usize,
) -> MigrationResult<u64> {
    let on_conflict = OnConflict::columns([
        person_film_work::Column::FilmWorkId,
        person_film_work::Column::PersonId,
        person_film_work::Column::Role,
    ])
    .do_nothing()
    .to_owned();

    let written = insert_batches(
        db,
        "person_film_work",
        rows.iter().cloned().map(person_film_work::ActiveModel::from),
        batch_size,
        Some(on_conflict),
    )
    .await?;

    let skipped = (rows.len() as u64).saturating_sub(written);
    if skipped > 0 {
        warn!(table = "person_film_work", skipped, "credits already present, skipped");
    }
    Ok(written)
}

async fn insert_batches<A, C>(
    db: &C,
    table: &'static str,
    rows: impl IntoIterator<Item = A>,
    batch_size: usize,
    on_conflict: Option<OnConflict>,
) -> MigrationResult<u64>
where
    A: ActiveModelTrait,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
    C: ConnectionTrait,
{
    let mut rows = rows.into_iter();
    let mut written = 0;
    let mut batches = 0;

    loop {
        let chunk: Vec<A> = rows.by_ref().take(batch_size.max(1)).collect();
        if chunk.is_empty() {
            break;
        }

        let mut insert = <A::Entity as EntityTrait>::insert_many(chunk);
        if let Some(on_conflict) = &on_conflict {
            insert = insert.on_conflict(on_conflict.clone());
        }
        written += insert.exec_without_returning(db).await.map_err(MigrationError::write(table))?;
        batches += 1;
    }

    info!(table, rows = written, batches, "loaded table");
    Ok(written)
}
