use std::collections::HashSet;

use time::OffsetDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::{
    entities::{
        film_work::{self, FilmWorkType},
        genre, genre_film_work, person,
        person_film_work::{self, Role},
    },
    identity::{EntityKind, IdentityMap, Resolved},
    models::Movie,
};

/// Rows accumulated in memory for the five target tables.
#[derive(Clone, Debug, Default)]
pub struct Tables {
    pub film_work: Vec<film_work::Model>,
    pub genre: Vec<genre::Model>,
    pub person: Vec<person::Model>,
    pub person_film_work: Vec<person_film_work::Model>,
    pub genre_film_work: Vec<genre_film_work::Model>,
}

/// Turns normalized films into entity and junction rows, creating a person or
/// genre row the first time its name is seen in the run.
#[derive(Debug, Default)]
pub struct RelationBuilder {
    tables: Tables,
}

impl RelationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one film and returns the id generated for it.
    pub fn add(&mut self, movie: Movie, identities: &mut IdentityMap) -> Uuid {
        let now = OffsetDateTime::now_utc();
        let film_work_id = Uuid::new_v4();

        let credits = [
            (Role::Actor, movie.actors.as_slice()),
            (Role::Writer, movie.writers.as_slice()),
            (Role::Director, movie.directors.as_deref().unwrap_or_default()),
        ];
        for (role, names) in credits {
            for name in names {
                let person_id = self.resolve_person(identities, name, now);
                self.tables.person_film_work.push(person_film_work::Model {
                    id: Uuid::new_v4(),
                    film_work_id,
                    person_id,
                    role,
                    created: now,
                });
            }
        }

        let mut linked = HashSet::new();
        for name in &movie.genres {
            let genre_id = self.resolve_genre(identities, name, now);
            if !linked.insert(genre_id) {
                continue;
            }
            self.tables.genre_film_work.push(genre_film_work::Model {
                id: Uuid::new_v4(),
                film_work_id,
                genre_id,
                created: now,
            });
        }

        debug!(
            source_id = %movie.source_id,
            %film_work_id,
            genres = linked.len(),
            "built film relations"
        );

        self.tables.film_work.push(film_work::Model {
            id: film_work_id,
            title: movie.title,
            description: movie.description,
            creation_date: None,
            certificate: Some(String::new()),
            file_path: None,
            rating: movie.rating,
            r#type: FilmWorkType::Movie,
            created: now,
            modified: now,
        });

        film_work_id
    }

    pub fn finish(self) -> Tables {
        self.tables
    }

    fn resolve_person(
        &mut self,
        identities: &mut IdentityMap,
        name: &str,
        now: OffsetDateTime,
    ) -> Uuid {
        match identities.resolve(EntityKind::Person, name) {
            Resolved::New(id) => {
                self.tables.person.push(person::Model {
                    id,
                    full_name: name.to_string(),
                    birth_date: None,
                    created: now,
                    modified: now,
                });
                id
            },
            Resolved::Existing(id) => id,
        }
    }

    fn resolve_genre(
        &mut self,
        identities: &mut IdentityMap,
        name: &str,
        now: OffsetDateTime,
    ) -> Uuid {
        match identities.resolve(EntityKind::Genre, name) {
            Resolved::New(id) => {
                self.tables.genre.push(genre::Model {
                    id,
                    name: name.to_string(),
                    description: Some(String::new()),
                    created: now,
                    modified: now,
                });
                id
            },
            Resolved::Existing(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie {
            source_id: title.to_lowercase(),
            title: title.to_string(),
            description: None,
            rating: Some(8.1),
            genres: vec!["Action".to_string(), "Drama".to_string()],
            actors: vec!["Alice".to_string()],
            writers: vec!["Bob".to_string()],
            directors: Some(vec!["Alice".to_string()]),
        }
    }

    fn credits(tables: &Tables, film: Uuid) -> Vec<(Uuid, Role)> {
        tables
            .person_film_work
            .iter()
            .filter(|row| row.film_work_id == film)
            .map(|row| (row.person_id, row.role))
            .collect()
    }

    #[test]
    fn one_row_per_role_in_fixed_order() {
        let mut ids = IdentityMap::new();
        let mut builder = RelationBuilder::new();
        let film = builder.add(movie("Heat"), &mut ids);
        let tables = builder.finish();

        let alice = ids.resolve(EntityKind::Person, "Alice").id();
        let bob = ids.resolve(EntityKind::Person, "Bob").id();
        assert_eq!(
            credits(&tables, film),
            vec![(alice, Role::Actor), (bob, Role::Writer), (alice, Role::Director)]
        );
        assert_eq!(tables.person.len(), 2);
        assert_eq!(tables.film_work.len(), 1);
        assert_eq!(tables.film_work[0].id, film);
        assert_eq!(tables.film_work[0].r#type, FilmWorkType::Movie);
    }

    #[test]
    fn people_and_genres_are_shared_across_films() {
        let mut ids = IdentityMap::new();
        let mut builder = RelationBuilder::new();
        let heat = builder.add(movie("Heat"), &mut ids);
        let ronin = builder.add(movie("Ronin"), &mut ids);
        let tables = builder.finish();

        assert_eq!(tables.person.len(), 2);
        assert_eq!(tables.genre.len(), 2);
        assert_eq!(tables.genre_film_work.len(), 4);
        assert_eq!(tables.person_film_work.len(), 6);

        let alice = tables.person.iter().find(|p| p.full_name == "Alice").unwrap().id;
        let alice_films: HashSet<Uuid> = tables
            .person_film_work
            .iter()
            .filter(|row| row.person_id == alice && row.role == Role::Actor)
            .map(|row| row.film_work_id)
            .collect();
        assert_eq!(alice_films, HashSet::from([heat, ronin]));
    }

    #[test]
    fn repeated_genre_links_once() {
        let mut ids = IdentityMap::new();
        let mut builder = RelationBuilder::new();
        let mut m = movie("Heat");
        m.genres = vec!["Crime".to_string(), "Crime".to_string()];
        builder.add(m, &mut ids);
        let tables = builder.finish();

        assert_eq!(tables.genre.len(), 1);
        assert_eq!(tables.genre_film_work.len(), 1);
    }

    #[test]
    fn duplicate_actor_credits_stay_in_memory() {
        let mut ids = IdentityMap::new();
        let mut builder = RelationBuilder::new();
        let mut m = movie("Heat");
        m.actors = vec!["Alice".to_string(), "Alice".to_string()];
        m.writers.clear();
        m.directors = None;
        builder.add(m, &mut ids);
        let tables = builder.finish();

        assert_eq!(tables.person.len(), 1);
        assert_eq!(tables.person_film_work.len(), 2);
        assert!(tables.person_film_work.iter().all(|row| row.role == Role::Actor));
    }
}
