use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use peoplehub_core::PersonId;
use peoplehub_people::{Person, PersonRepository, RepositoryError};

/// In-memory person store for tests/dev.
///
/// Records iterate in ascending id order. Identifiers start at 1.
#[derive(Debug)]
pub struct InMemoryPersonRepository {
    inner: RwLock<BTreeMap<PersonId, Person>>,
    next_id: AtomicI64,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Seed the store. Records without an id are assigned one.
    pub fn with_people(people: impl IntoIterator<Item = Person>) -> Self {
        let repo = Self::new();
        if let Ok(mut map) = repo.inner.write() {
            for mut person in people {
                let id = match person.id {
                    Some(id) => {
                        repo.next_id.fetch_max(id.get() + 1, Ordering::SeqCst);
                        id
                    }
                    None => repo.next_person_id(),
                };
                person.id = Some(id);
                map.insert(id, person);
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn next_person_id(&self) -> PersonId {
        PersonId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for InMemoryPersonRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::storage("in-memory person store lock poisoned")
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, RepositoryError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, RepositoryError> {
        let map = self.inner.read().map_err(|_| poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn save(&self, mut person: Person) -> Result<Person, RepositoryError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        let id = match person.id {
            Some(id) if !map.contains_key(&id) => return Err(RepositoryError::NotFound(id)),
            Some(id) => id,
            None => self.next_person_id(),
        };
        person.id = Some(id);
        map.insert(id, person.clone());
        Ok(person)
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<(), RepositoryError> {
        let mut map = self.inner.write().map_err(|_| poisoned())?;
        map.remove(&id);
        Ok(())
    }
}
