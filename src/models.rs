use std::collections::HashMap;

use serde::Deserialize;

/// Placeholder the legacy catalog stores when a value is unknown.
pub const SENTINEL: &str = "N/A";

/// Reference to a row of the legacy `writers` table.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct WriterRef {
    pub id: String,
}

/// The legacy `writers` column holds either one object or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum WriterRefs {
    One(WriterRef),
    Many(Vec<WriterRef>),
}

impl From<WriterRefs> for Vec<WriterRef> {
    fn from(refs: WriterRefs) -> Self {
        match refs {
            WriterRefs::One(one) => vec![one],
            WriterRefs::Many(many) => many,
        }
    }
}

/// Writer id to name, loaded once per run.
pub type WriterNames = HashMap<String, String>;

/// One film as it comes out of the legacy catalog, before any normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct RawMovie {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub director: String,
    pub plot: String,
    pub imdb_rating: String,
    /// Aligned with `actor_names` by position.
    pub actor_ids: Option<Vec<String>>,
    pub actor_names: Option<Vec<String>>,
    pub writers: Vec<WriterRef>,
}

/// A film ready for entity resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct Movie {
    pub source_id: String,
    pub title: String,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub writers: Vec<String>,
    pub directors: Option<Vec<String>>,
}
