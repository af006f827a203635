//! Persistence port for person records.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use peoplehub_core::PersonId;

use crate::person::Person;

/// Storage failure surfaced by a repository adapter.
///
/// The service reports `NotFound` from an update as a missing resource and
/// propagates everything else unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("storage failure: {0}")]
    Storage(String),

    /// An update targeted an id that is no longer stored.
    #[error("no person stored with id {0}")]
    NotFound(PersonId),
}

impl RepositoryError {
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// Durable storage of [`Person`] entities.
///
/// Implementations must:
/// - assign a fresh identifier when saving an entity whose `id` is `None`
/// - overwrite the stored record when saving an entity that has an `id`,
///   failing with `RepositoryError::NotFound` if that record is gone
/// - return the stored state from `save`
/// - treat `delete_by_id` on an unknown id as a no-op
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// All records, in storage iteration order.
    async fn find_all(&self) -> Result<Vec<Person>, RepositoryError>;

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, RepositoryError>;

    /// Insert (no id) or update (id), returning the persisted record.
    /// Never re-creates a record that has been deleted.
    async fn save(&self, person: Person) -> Result<Person, RepositoryError>;

    async fn delete_by_id(&self, id: PersonId) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<R> PersonRepository for Arc<R>
where
    R: PersonRepository + ?Sized,
{
    async fn find_all(&self) -> Result<Vec<Person>, RepositoryError> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, RepositoryError> {
        (**self).find_by_id(id).await
    }

    async fn save(&self, person: Person) -> Result<Person, RepositoryError> {
        (**self).save(person).await
    }

    async fn delete_by_id(&self, id: PersonId) -> Result<(), RepositoryError> {
        (**self).delete_by_id(id).await
    }
}
