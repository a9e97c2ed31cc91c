use std::collections::HashSet;

use crate::{
    error::{MigrationError, MigrationResult},
    models::{Movie, RawMovie, SENTINEL, WriterNames},
};

/// Normalizes one legacy film: sentinels become absent values, comma lists
/// become vectors and writer references become names.
pub fn transform(raw: RawMovie, writer_names: &WriterNames) -> MigrationResult<Movie> {
    let writers = resolve_writers(&raw, writer_names)?;
    let rating = parse_rating(&raw.id, &raw.imdb_rating)?;

    Ok(Movie {
        genres: split_genres(&raw.genre),
        actors: actor_names(raw.actor_ids, raw.actor_names),
        directors: split_directors(&raw.director),
        description: (raw.plot != SENTINEL).then_some(raw.plot),
        title: raw.title,
        source_id: raw.id,
        rating,
        writers,
    })
}

fn split_genres(genre: &str) -> Vec<String> {
    genre.split(',').map(str::trim).filter(|g| !g.is_empty()).map(str::to_string).collect()
}

fn split_directors(director: &str) -> Option<Vec<String>> {
    if director == SENTINEL {
        return None;
    }
    Some(director.split(',').map(|d| d.trim().to_string()).collect())
}

fn parse_rating(movie_id: &str, rating: &str) -> MigrationResult<Option<f64>> {
    if rating == SENTINEL {
        return Ok(None);
    }
    match rating.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(MigrationError::InvalidNumericField {
            movie_id: movie_id.to_string(),
            field: "imdb_rating",
            value: rating.to_string(),
        }),
    }
}

// Writers are deduplicated per film by id; actors are not.
fn resolve_writers(raw: &RawMovie, writer_names: &WriterNames) -> MigrationResult<Vec<String>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for writer in &raw.writers {
        let Some(name) = writer_names.get(&writer.id) else {
            return Err(MigrationError::WriterResolution {
                movie_id: raw.id.clone(),
                writer_id: writer.id.clone(),
            });
        };
        if name == SENTINEL || !seen.insert(writer.id.as_str()) {
            continue;
        }
        out.push(name.clone());
    }

    Ok(out)
}

fn actor_names(ids: Option<Vec<String>>, names: Option<Vec<String>>) -> Vec<String> {
    let (Some(ids), Some(names)) = (ids, names) else {
        return Vec::new();
    };
    ids.into_iter().zip(names).map(|(_, name)| name).filter(|name| name != SENTINEL).collect()
}
