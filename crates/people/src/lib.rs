//! `peoplehub-people` — the Person resource.
//!
//! - `person`: storage-side entity and boundary-side view object
//! - `mapper`: conversions between the two
//! - `repository`: the persistence port the service depends on
//! - `service`: CRUD operations + self-link decoration

pub mod mapper;
pub mod person;
pub mod repository;
pub mod service;

#[cfg(test)]
mod mocks;

pub use person::{Person, PersonVo};
pub use repository::{PersonRepository, RepositoryError};
pub use service::{NOT_FOUND_MESSAGE, NULL_OBJECT_MESSAGE, PERSON_BASE_PATH, PersonService, PersonServiceError};
