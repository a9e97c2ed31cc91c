use sea_orm::DbErr;

/// Every failure is fatal to the run; the variants only say where it happened.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("source query failed: {0}")]
    SourceQuery(#[source] DbErr),

    #[error("movie {movie_id}: malformed row, {field}")]
    MalformedRow { movie_id: String, field: String },

    #[error("movie {movie_id}: invalid numeric value {value:?} in {field}")]
    InvalidNumericField { movie_id: String, field: &'static str, value: String },

    #[error("movie {movie_id}: writer {writer_id} is not in the writers table")]
    WriterResolution { movie_id: String, writer_id: String },

    #[error("write to {table} failed: {source}")]
    Write {
        table: &'static str,
        #[source]
        source: DbErr,
    },
}

impl MigrationError {
    pub fn stage(&self) -> &'static str {
        match self {
            Self::SourceQuery(_) | Self::MalformedRow { .. } => "extract",
            Self::InvalidNumericField { .. } | Self::WriterResolution { .. } => "transform",
            Self::Write { .. } => "load",
        }
    }

    pub(crate) fn write(table: &'static str) -> impl FnOnce(DbErr) -> Self {
        move |source| Self::Write { table, source }
    }
}

pub type MigrationResult<T> = Result<T, MigrationError>;
