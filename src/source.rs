use futures::{Stream, StreamExt};
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement};
use tracing::debug;

use crate::{
    error::{MigrationError, MigrationResult},
    models::{RawMovie, WriterNames, WriterRef, WriterRefs},
};

// Actor ids and names are concatenated over the same joined rows, so their
// positions line up.
const MOVIES_SQL: &str = r#"
WITH x AS (
    SELECT m.id, group_concat(a.id) AS actors_ids, group_concat(a.name) AS actors_names
    FROM movies m
    LEFT JOIN movie_actors ma ON m.id = ma.movie_id
    LEFT JOIN actors a ON ma.actor_id = a.id
    GROUP BY m.id
)
SELECT m.id, m.genre, m.director, m.title, m.plot,
       CAST(m.imdb_rating AS TEXT) AS imdb_rating,
       x.actors_ids, x.actors_names, m.writer, m.writers
FROM movies m
LEFT JOIN x ON m.id = x.id
ORDER BY m.id
"#;

const WRITERS_SQL: &str = "SELECT DISTINCT id, name FROM writers";

#[derive(Debug, FromQueryResult)]
struct MovieRow {
    id: Option<String>,
    genre: Option<String>,
    director: Option<String>,
    title: Option<String>,
    plot: Option<String>,
    imdb_rating: Option<String>,
    actors_ids: Option<String>,
    actors_names: Option<String>,
    writer: Option<String>,
    writers: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct WriterRow {
    id: String,
    name: String,
}

/// Loads every writer once. The main query cannot resolve single-writer
/// films by itself.
pub async fn load_writer_names(db: &DatabaseConnection) -> MigrationResult<WriterNames> {
    let rows = WriterRow::find_by_statement(Statement::from_string(
        db.get_database_backend(),
        WRITERS_SQL.to_string(),
    ))
    .all(db)
    .await
    .map_err(MigrationError::SourceQuery)?;

    let writers: WriterNames = rows.into_iter().map(|w| (w.id, w.name)).collect();
    debug!(writers = writers.len(), "loaded writer names");
    Ok(writers)
}

/// Streams the denormalized films, one per legacy `movies` row.
pub async fn stream_movies(
    db: &DatabaseConnection,
) -> MigrationResult<impl Stream<Item = MigrationResult<RawMovie>> + '_> {
    let rows = MovieRow::find_by_statement(Statement::from_string(
        db.get_database_backend(),
        MOVIES_SQL.to_string(),
    ))
    .stream(db)
    .await
    .map_err(MigrationError::SourceQuery)?;

    Ok(rows.map(|row| row.map_err(MigrationError::SourceQuery).and_then(MovieRow::into_raw)))
}

impl MovieRow {
    fn into_raw(self) -> MigrationResult<RawMovie> {
        let Some(id) = self.id else {
            return Err(malformed("<unknown>", "id is null"));
        };

        let writers = decode_writers(&id, self.writer.as_deref(), self.writers.as_deref())?;

        Ok(RawMovie {
            title: required(&id, "title", self.title)?,
            genre: required(&id, "genre", self.genre)?,
            director: required(&id, "director", self.director)?,
            plot: required(&id, "plot", self.plot)?,
            imdb_rating: required(&id, "imdb_rating", self.imdb_rating)?,
            actor_ids: self.actors_ids.as_deref().map(split_aggregate),
            actor_names: self.actors_names.as_deref().map(split_aggregate),
            writers,
            id,
        })
    }
}

fn required(movie_id: &str, field: &str, value: Option<String>) -> MigrationResult<String> {
    value.ok_or_else(|| malformed(movie_id, &format!("{field} is null")))
}

fn malformed(movie_id: &str, field: &str) -> MigrationError {
    MigrationError::MalformedRow { movie_id: movie_id.to_string(), field: field.to_string() }
}

fn split_aggregate(joined: &str) -> Vec<String> {
    joined.split(',').map(str::to_string).collect()
}

/// Single-writer films keep a bare id (or one JSON object) in `writer` and an
/// empty `writers`; the rest keep a JSON list in `writers`. Both come out as a
/// list.
fn decode_writers(
    movie_id: &str,
    writer: Option<&str>,
    writers: Option<&str>,
) -> MigrationResult<Vec<WriterRef>> {
    if let Some(json) = writers.map(str::trim).filter(|s| !s.is_empty()) {
        return parse_writer_json(movie_id, "writers", json);
    }

    match writer.map(str::trim) {
        Some(w) if w.starts_with('{') || w.starts_with('[') => {
            parse_writer_json(movie_id, "writer", w)
        },
        Some("") => Ok(Vec::new()),
        Some(w) => Ok(vec![WriterRef { id: w.to_string() }]),
        None if writers.is_some() => Ok(Vec::new()),
        None => Err(malformed(movie_id, "writer and writers are both null")),
    }
}

fn parse_writer_json(movie_id: &str, field: &str, json: &str) -> MigrationResult<Vec<WriterRef>> {
    serde_json::from_str::<WriterRefs>(json)
        .map(Vec::from)
        .map_err(|err| malformed(movie_id, &format!("{field} is not a writer reference: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(ids: &[&str]) -> Vec<WriterRef> {
        ids.iter().map(|id| WriterRef { id: id.to_string() }).collect()
    }

    fn row() -> MovieRow {
        MovieRow {
            id: Some("tt001".to_string()),
            genre: Some("Action, Sci-Fi".to_string()),
            director: Some("N/A".to_string()),
            title: Some("Star Trek".to_string()),
            plot: Some("N/A".to_string()),
            imdb_rating: Some("6.4".to_string()),
            actors_ids: Some("a1,a2".to_string()),
            actors_names: Some("Alice,N/A".to_string()),
            writer: Some("w1".to_string()),
            writers: Some(String::new()),
        }
    }

    #[test]
    fn list_column_wins_over_single_writer() {
        let out = decode_writers("m", Some("w9"), Some(r#"[{"id": "w1"}, {"id": "w2"}]"#)).unwrap();
        assert_eq!(out, refs(&["w1", "w2"]));
    }

    #[test]
    fn bare_single_writer_becomes_a_list() {
        assert_eq!(decode_writers("m", Some("w1"), Some("")).unwrap(), refs(&["w1"]));
    }

    #[test]
    fn single_writer_object_becomes_a_list() {
        assert_eq!(decode_writers("m", Some(r#"{"id":"w1"}"#), None).unwrap(), refs(&["w1"]));
        assert_eq!(decode_writers("m", None, Some(r#"{"id":"w1"}"#)).unwrap(), refs(&["w1"]));
    }

    #[test]
    fn no_writer_at_all_is_empty() {
        assert!(decode_writers("m", Some(""), Some("")).unwrap().is_empty());
    }

    #[test]
    fn broken_writer_json_is_malformed() {
        let err = decode_writers("m", None, Some("[{\"id\":")).unwrap_err();
        assert!(matches!(err, MigrationError::MalformedRow { .. }));
    }

    #[test]
    fn missing_writer_columns_are_malformed() {
        let err = decode_writers("m", None, None).unwrap_err();
        assert!(matches!(err, MigrationError::MalformedRow { .. }));
    }

    #[test]
    fn row_decodes_aligned_actor_lists() {
        let raw = row().into_raw().unwrap();
        assert_eq!(raw.id, "tt001");
        assert_eq!(raw.actor_ids, Some(vec!["a1".to_string(), "a2".to_string()]));
        assert_eq!(raw.actor_names, Some(vec!["Alice".to_string(), "N/A".to_string()]));
        assert_eq!(raw.writers, refs(&["w1"]));
    }

    #[test]
    fn null_title_is_malformed() {
        let mut r = row();
        r.title = None;
        match r.into_raw() {
            Err(MigrationError::MalformedRow { movie_id, field }) => {
                assert_eq!(movie_id, "tt001");
                assert!(field.contains("title"));
            },
            other => panic!("expected malformed row, got {other:?}"),
        }
    }
}
