//! Test doubles: deterministic person fixtures and a recording repository.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use peoplehub_core::PersonId;

use crate::person::{Person, PersonVo};
use crate::repository::{PersonRepository, RepositoryError};

/// Numbered fixtures; odd numbers are "Female", even numbers "Male".
pub struct MockPerson;

impl MockPerson {
    fn gender(n: i64) -> &'static str {
        if n % 2 == 0 { "Male" } else { "Female" }
    }

    pub fn entity(n: i64) -> Person {
        Person {
            id: Some(PersonId::new(n)),
            first_name: format!("First Name Test{n}"),
            last_name: format!("Last Name Test{n}"),
            address: format!("Addres Test{n}"),
            gender: Self::gender(n).to_string(),
        }
    }

    pub fn entity_list() -> Vec<Person> {
        (0..14).map(Self::entity).collect()
    }

    /// A view with the same fields as `entity(n)` but no key.
    pub fn vo(n: i64) -> PersonVo {
        PersonVo {
            key: None,
            first_name: format!("First Name Test{n}"),
            last_name: format!("Last Name Test{n}"),
            address: format!("Addres Test{n}"),
            gender: Self::gender(n).to_string(),
            links: Default::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FindAll,
    FindById(PersonId),
    Save(Person),
    DeleteById(PersonId),
}

/// Map-backed repository that records every call it receives.
#[derive(Debug)]
pub struct MockPersonRepository {
    people: Mutex<BTreeMap<PersonId, Person>>,
    next_id: Mutex<i64>,
    calls: Mutex<Vec<Call>>,
    failure: Option<String>,
    evict_on_lookup: bool,
}

impl Default for MockPersonRepository {
    fn default() -> Self {
        Self {
            people: Mutex::new(BTreeMap::new()),
            next_id: Mutex::new(1),
            calls: Mutex::new(Vec::new()),
            failure: None,
            evict_on_lookup: false,
        }
    }
}

impl MockPersonRepository {
    pub fn with_people(people: impl IntoIterator<Item = Person>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.people.lock().unwrap();
            let mut next = repo.next_id.lock().unwrap();
            for p in people {
                let id = p.id.expect("fixture without id");
                *next = (*next).max(id.get() + 1);
                map.insert(id, p);
            }
        }
        repo
    }

    /// Every call fails with a storage error.
    pub fn failing(msg: &str) -> Self {
        Self {
            failure: Some(msg.to_string()),
            ..Self::default()
        }
    }

    /// Lookups hand the record back and drop it, as if another client
    /// deleted it right after the read.
    pub fn evicting_on_lookup(people: impl IntoIterator<Item = Person>) -> Self {
        Self {
            evict_on_lookup: true,
            ..Self::with_people(people)
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn get(&self, id: PersonId) -> Option<Person> {
        self.people.lock().unwrap().get(&id).cloned()
    }

    fn record(&self, call: Call) -> Result<(), RepositoryError> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(msg) => Err(RepositoryError::storage(msg.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PersonRepository for MockPersonRepository {
    async fn find_all(&self) -> Result<Vec<Person>, RepositoryError> {
        self.record(Call::FindAll)?;
        Ok(self.people.lock().unwrap().values().cloned().collect())
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, RepositoryError> {
        self.record(Call::FindById(id))?;
        let mut people = self.people.lock().unwrap();
        if self.evict_on_lookup {
            Ok(people.remove(&id))
        } else {
            Ok(people.get(&id).cloned())
        }
    }

    async fn save(&self, mut person: Person) -> Result<Person, RepositoryError> {
        self.record(Call::Save(person.clone()))?;
        let id = match person.id {
            Some(id) if self.get(id).is_none() => return Err(RepositoryError::NotFound(id)),
            Some(id) => id,
            None => {
                let mut next = self.next_id.lock().unwrap();
                let id = PersonId::new(*next);
                *next += 1;
                id
            }
        };
        person.id = Some(id);
        self.people.lock().unwrap().insert(id, person.clone());
        Ok(person)
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<(), RepositoryError> {
        self.record(Call::DeleteById(id))?;
        self.people.lock().unwrap().remove(&id);
        Ok(())
    }
}
