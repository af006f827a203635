//! `PersonRepository` adapters.
//!
//! - `in_memory`: map-backed store for tests/dev
//! - `postgres`: persistent store on a sqlx connection pool

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryPersonRepository;
pub use postgres::PostgresPersonRepository;
