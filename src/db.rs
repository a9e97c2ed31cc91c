use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use tracing::info;

/// Opens the legacy catalog. Only ever read from.
pub async fn connect_source(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(database_url);
    opts.sqlx_logging(false);
    Database::connect(opts).await
}

/// Opens the target store with the content schema on the search path, so the
/// entities can stay schema-agnostic.
pub async fn connect_target(database_url: &str, schema: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(database_url);
    opts.sqlx_logging(false);
    if database_url.starts_with("postgres") {
        opts.set_schema_search_path(schema);
    }
    let db = Database::connect(opts).await?;

    if db.get_database_backend() == DatabaseBackend::Sqlite {
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "PRAGMA foreign_keys=ON".to_string(),
        ))
        .await?;
    }

    Ok(db)
}

/// Creates the target tables and their unique indexes. Production targets are
/// normally prepared out of band.
pub async fn apply_schema(db: &DatabaseConnection, schema: &str) -> Result<(), DbErr> {
    if db.get_database_backend() == DatabaseBackend::Postgres {
        db.execute(Statement::from_string(
            DatabaseBackend::Postgres,
            format!("CREATE SCHEMA IF NOT EXISTS \"{}\"", schema.replace('"', "\"\"")),
        ))
        .await?;
    }
    Migrator::up(db, None).await?;
    info!(schema = %schema, "target schema applied");
    Ok(())
}
