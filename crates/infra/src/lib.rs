//! Infrastructure layer: storage adapters for the person repository port.

pub mod repository;

pub use repository::{InMemoryPersonRepository, PostgresPersonRepository};
