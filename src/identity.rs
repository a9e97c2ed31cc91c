use std::collections::HashMap;

use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Genre,
}

/// Outcome of a lookup. `New` is returned exactly once per distinct name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved {
    New(Uuid),
    Existing(Uuid),
}

impl Resolved {
    pub fn id(self) -> Uuid {
        match self {
            Resolved::New(id) | Resolved::Existing(id) => id,
        }
    }
}

/// Natural-key to id maps for people and genres, owned by a single run.
///
/// Names match by exact string equality; the empty string is a valid key.
#[derive(Debug, Default)]
pub struct IdentityMap {
    people: HashMap<String, Uuid>,
    genres: HashMap<String, Uuid>,
}

impl IdentityMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, kind: EntityKind, name: &str) -> Resolved {
        let map = match kind {
            EntityKind::Person => &mut self.people,
            EntityKind::Genre => &mut self.genres,
        };

        if let Some(id) = map.get(name) {
            return Resolved::Existing(*id);
        }
        let id = Uuid::new_v4();
        map.insert(name.to_string(), id);
        Resolved::New(id)
    }

    pub fn len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Person => self.people.len(),
            EntityKind::Genre => self.genres.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_name_resolves_to_same_id() {
        let mut ids = IdentityMap::new();
        let first = ids.resolve(EntityKind::Person, "Alice");
        let second = ids.resolve(EntityKind::Person, "Alice");
        assert!(matches!(first, Resolved::New(_)));
        assert_eq!(second, Resolved::Existing(first.id()));
    }

    #[test]
    fn different_names_never_collide() {
        let mut ids = IdentityMap::new();
        let a = ids.resolve(EntityKind::Person, "Alice").id();
        let b = ids.resolve(EntityKind::Person, "Bob").id();
        assert_ne!(a, b);
        assert_eq!(ids.len(EntityKind::Person), 2);
    }

    #[test]
    fn matching_is_exact() {
        let mut ids = IdentityMap::new();
        let a = ids.resolve(EntityKind::Genre, "Drama").id();
        assert_ne!(a, ids.resolve(EntityKind::Genre, "drama").id());
        assert_ne!(a, ids.resolve(EntityKind::Genre, " Drama").id());
        assert!(matches!(ids.resolve(EntityKind::Genre, ""), Resolved::New(_)));
        assert_eq!(ids.len(EntityKind::Genre), 4);
    }

    #[test]
    fn kinds_are_independent() {
        let mut ids = IdentityMap::new();
        let person = ids.resolve(EntityKind::Person, "Western");
        let genre = ids.resolve(EntityKind::Genre, "Western");
        assert!(matches!(genre, Resolved::New(_)));
        assert_ne!(person.id(), genre.id());
    }
}
