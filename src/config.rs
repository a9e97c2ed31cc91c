use anyhow::Context;

#[derive(Clone, Debug)]
pub struct Config {
    pub source_database_url: String,
    pub target_database_url: String,
    pub target_schema: String,
    pub load_batch_size: usize,
    pub apply_target_schema: bool,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let source_database_url = std::env::var("SOURCE_DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://db.sqlite?mode=ro".to_string());

        let target_database_url =
            std::env::var("TARGET_DATABASE_URL").context("TARGET_DATABASE_URL must be set")?;

        let target_schema =
            std::env::var("TARGET_SCHEMA").unwrap_or_else(|_| "content".to_string());

        let load_batch_size: usize = std::env::var("LOAD_BATCH_SIZE")
            .unwrap_or_else(|_| "500".to_string())
            .parse()
            .context("LOAD_BATCH_SIZE")?;

        let apply_target_schema: bool = std::env::var("APPLY_TARGET_SCHEMA")
            .unwrap_or_else(|_| "false".to_string())
            .parse()
            .context("APPLY_TARGET_SCHEMA")?;

        Ok(Self {
            source_database_url,
            target_database_url,
            target_schema,
            load_batch_size: load_batch_size.max(1),
            apply_target_schema,
        })
    }
}
