//! `peoplehub-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod link;
pub mod value_object;

pub use entity::Entity;
pub use error::DomainError;
pub use id::PersonId;
pub use link::{Link, Links};
pub use value_object::ValueObject;
