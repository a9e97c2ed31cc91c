use anyhow::Context;
use catalog_migrate::{config::Config, db, pipeline};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,catalog_migrate=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let source = db::connect_source(&config.source_database_url)
        .await
        .context("connecting to source catalog")?;
    let target = db::connect_target(&config.target_database_url, &config.target_schema)
        .await
        .context("connecting to target store")?;

    if config.apply_target_schema {
        db::apply_schema(&target, &config.target_schema).await.context("applying target schema")?;
    }

    match pipeline::run(&source, &target, config.load_batch_size).await {
        Ok(report) => {
            tracing::info!(films = report.films_read, loaded = ?report.loaded, "done");
            Ok(())
        },
        Err(err) => {
            tracing::error!(stage = err.stage(), error = %err, "migration failed");
            Err(err.into())
        },
    }
}
