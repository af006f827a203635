//! Person service: the business layer between the wire and storage.
//!
//! Every view returned from this service carries a `self` link built from
//! the configured base path and the record identifier.

use thiserror::Error;
use tracing::{info, instrument};

use peoplehub_core::{Link, PersonId};

use crate::mapper;
use crate::person::{Person, PersonVo};
use crate::repository::{PersonRepository, RepositoryError};

/// Canonical collection path of the person resource.
pub const PERSON_BASE_PATH: &str = "/api/person/v1";

pub const NULL_OBJECT_MESSAGE: &str = "It is not allowed to persist a null object!";
pub const NOT_FOUND_MESSAGE: &str = "No records found for this ID!";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersonServiceError {
    /// A write was attempted without a payload.
    #[error("It is not allowed to persist a null object!")]
    RequiredObjectIsNull,

    /// No record matches the identifier (or the payload carried none).
    #[error("No records found for this ID!")]
    ResourceNotFound { key: Option<PersonId> },

    /// Storage handed back a record without an identifier, so no link can
    /// be built for it.
    #[error("stored person has no identifier")]
    MissingKey,

    #[error("repository failure: {0}")]
    Repository(#[from] RepositoryError),
}

impl PersonServiceError {
    fn not_found(key: PersonId) -> Self {
        Self::ResourceNotFound { key: Some(key) }
    }
}

pub type PersonServiceResult<T> = Result<T, PersonServiceError>;

/// CRUD operations over person records.
///
/// The repository is supplied at construction; the service holds no other state.
#[derive(Debug, Clone)]
pub struct PersonService<R> {
    repository: R,
    base_path: String,
}

impl<R> PersonService<R>
where
    R: PersonRepository,
{
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            base_path: PERSON_BASE_PATH.to_string(),
        }
    }

    /// Override the collection path used for `self` links.
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    #[instrument(skip(self))]
    pub async fn find_all(&self) -> PersonServiceResult<Vec<PersonVo>> {
        info!("finding all people");

        let entities = self.repository.find_all().await?;
        mapper::to_vo_list(&entities)
            .into_iter()
            .map(|vo| self.decorate(vo))
            .collect()
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: PersonId) -> PersonServiceResult<PersonVo> {
        info!("finding one person");

        let entity = self.load(id).await?;
        self.decorate(mapper::to_vo(&entity))
    }

    #[instrument(skip(self, vo))]
    pub async fn create(&self, vo: Option<PersonVo>) -> PersonServiceResult<PersonVo> {
        let vo = vo.ok_or(PersonServiceError::RequiredObjectIsNull)?;
        info!("creating one person");

        let saved = self.repository.save(mapper::to_entity(&vo)).await?;
        self.decorate(mapper::to_vo(&saved))
    }

    #[instrument(skip(self, vo), fields(key = ?vo.as_ref().and_then(|v| v.key)))]
    pub async fn update(&self, vo: Option<PersonVo>) -> PersonServiceResult<PersonVo> {
        let vo = vo.ok_or(PersonServiceError::RequiredObjectIsNull)?;
        info!("updating one person");

        let key = vo
            .key
            .ok_or(PersonServiceError::ResourceNotFound { key: None })?;
        let mut entity = self.load(key).await?;
        mapper::apply_to(&vo, &mut entity);

        // The record may vanish between the lookup and the write.
        let saved = self.repository.save(entity).await.map_err(|err| match err {
            RepositoryError::NotFound(id) => PersonServiceError::not_found(id),
            other => other.into(),
        })?;
        self.decorate(mapper::to_vo(&saved))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: PersonId) -> PersonServiceResult<()> {
        info!("deleting one person");

        let entity = self.load(id).await?;
        let id = entity.id.unwrap_or(id);
        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    async fn load(&self, id: PersonId) -> PersonServiceResult<Person> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| PersonServiceError::not_found(id))
    }

    /// Attach the `self` link. A view without a key cannot be addressed, which
    /// only happens if storage returned an unsaved record.
    fn decorate(&self, mut vo: PersonVo) -> PersonServiceResult<PersonVo> {
        let key = vo.key.ok_or(PersonServiceError::MissingKey)?;
        vo.links.add(Link::self_link(&self.base_path, key));
        Ok(vo)
    }
}
