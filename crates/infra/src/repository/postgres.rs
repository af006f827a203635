//! Postgres-backed person repository.
//!
//! ## Schema
//!
//! `ensure_schema()` creates the `person` table if it does not exist:
//!
//! | column       | type          |
//! |--------------|---------------|
//! | `id`         | `BIGSERIAL` PK |
//! | `first_name` | `VARCHAR(80)` |
//! | `last_name`  | `VARCHAR(80)` |
//! | `address`    | `VARCHAR(100)` |
//! | `gender`     | `VARCHAR(6)`  |
//!
//! ## Error Mapping
//!
//! Every SQLx error becomes `RepositoryError::Storage`, with the failing
//! operation and (for database errors) the Postgres error code in the message.
//! Saving with an id that matches no row is `RepositoryError::NotFound`; rows
//! are only ever created through the `BIGSERIAL` sequence.
//!
//! ## Thread Safety
//!
//! `PostgresPersonRepository` is `Send + Sync`; connection management is left
//! to the SQLx pool.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use tracing::instrument;

use peoplehub_core::PersonId;
use peoplehub_people::{Person, PersonRepository, RepositoryError};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS person (
    id BIGSERIAL PRIMARY KEY,
    first_name VARCHAR(80) NOT NULL,
    last_name VARCHAR(80) NOT NULL,
    address VARCHAR(100) NOT NULL,
    gender VARCHAR(6) NOT NULL
)
"#;

#[derive(Debug, Clone)]
pub struct PostgresPersonRepository {
    pool: Arc<PgPool>,
}

impl PostgresPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// Open a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        Ok(Self::new(pool))
    }

    /// Create the `person` table if missing. Idempotent.
    #[instrument(skip(self))]
    pub async fn ensure_schema(&self) -> Result<(), RepositoryError> {
        sqlx::query(CREATE_TABLE)
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }

    async fn insert(&self, person: &Person) -> Result<Person, RepositoryError> {
        let row = sqlx::query(
            r#"
            INSERT INTO person (first_name, last_name, address, gender)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, address, gender
            "#,
        )
        .bind(&person.first_name)
        .bind(&person.last_name)
        .bind(&person.address)
        .bind(&person.gender)
        .fetch_one(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert", e))?;

        PersonRow::decode(&row).map(Into::into)
    }

    async fn update(&self, id: PersonId, person: &Person) -> Result<Person, RepositoryError> {
        let row = sqlx::query(
            r#"
            UPDATE person
            SET first_name = $2, last_name = $3, address = $4, gender = $5
            WHERE id = $1
            RETURNING id, first_name, last_name, address, gender
            "#,
        )
        .bind(id.get())
        .bind(&person.first_name)
        .bind(&person.last_name)
        .bind(&person.address)
        .bind(&person.gender)
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?
        .ok_or(RepositoryError::NotFound(id))?;

        PersonRow::decode(&row).map(Into::into)
    }
}

#[async_trait]
impl PersonRepository for PostgresPersonRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Person>, RepositoryError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, address, gender
            FROM person
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_all", e))?;

        rows.iter()
            .map(|r| PersonRow::decode(r).map(Into::into))
            .collect()
    }

    #[instrument(skip(self), fields(person_id = %id))]
    async fn find_by_id(&self, id: PersonId) -> Result<Option<Person>, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, address, gender
            FROM person
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_id", e))?;

        row.as_ref()
            .map(|r| PersonRow::decode(r).map(Into::into))
            .transpose()
    }

    #[instrument(skip(self, person), fields(person_id = ?person.id))]
    async fn save(&self, person: Person) -> Result<Person, RepositoryError> {
        match person.id {
            Some(id) => self.update(id, &person).await,
            None => self.insert(&person).await,
        }
    }

    #[instrument(skip(self), fields(person_id = %id))]
    async fn delete_by_id(&self, id: PersonId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM person WHERE id = $1")
            .bind(id.get())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_by_id", e))?;
        Ok(())
    }
}

/// Raw `person` row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PersonRow {
    id: i64,
    first_name: String,
    last_name: String,
    address: String,
    gender: String,
}

impl<'r> sqlx::FromRow<'r, PgRow> for PersonRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            address: row.try_get("address")?,
            gender: row.try_get("gender")?,
        })
    }
}

impl PersonRow {
    fn decode(row: &PgRow) -> Result<Self, RepositoryError> {
        <Self as sqlx::FromRow<'_, PgRow>>::from_row(row)
            .map_err(|e| RepositoryError::storage(format!("failed to decode person row: {e}")))
    }
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: Some(PersonId::new(row.id)),
            first_name: row.first_name,
            last_name: row.last_name,
            address: row.address,
            gender: row.gender,
        }
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> RepositoryError {
    match err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.to_string()).unwrap_or_default();
            RepositoryError::storage(format!(
                "database error in {operation} ({code}): {}",
                db_err.message()
            ))
        }
        sqlx::Error::PoolClosed => {
            RepositoryError::storage(format!("connection pool closed in {operation}"))
        }
        sqlx::Error::PoolTimedOut => {
            RepositoryError::storage(format!("connection pool timed out in {operation}"))
        }
        other => RepositoryError::storage(format!("sqlx error in {operation}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_maps_to_persisted_entity() {
        let row = PersonRow {
            id: 3,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            address: "London".into(),
            gender: "Female".into(),
        };
        let person: Person = row.into();
        assert_eq!(person.id, Some(PersonId::new(3)));
        assert_eq!(person.address, "London");
    }

    #[test]
    fn pool_errors_map_to_storage_failures() {
        let err = map_sqlx_error("find_all", sqlx::Error::PoolClosed);
        assert_eq!(
            err,
            RepositoryError::storage("connection pool closed in find_all")
        );
    }

    #[test]
    fn schema_statement_is_idempotent() {
        assert!(CREATE_TABLE.contains("CREATE TABLE IF NOT EXISTS person"));
        assert!(CREATE_TABLE.contains("id BIGSERIAL PRIMARY KEY"));
    }

    fn person(first: &str, address: &str) -> Person {
        Person {
            id: None,
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            address: address.to_string(),
            gender: "Female".to_string(),
        }
    }

    /// Runs only when `DATABASE_URL` points at a reachable Postgres.
    #[tokio::test]
    async fn crud_round_trip_against_database() {
        let Ok(url) = std::env::var("DATABASE_URL") else {
            return;
        };
        let repo = PostgresPersonRepository::connect(&url, 2).await.unwrap();
        repo.ensure_schema().await.unwrap();
        repo.ensure_schema().await.unwrap();

        let a = repo.save(person("Ann", "Main St")).await.unwrap();
        let b = repo.save(person("Bea", "Elm St")).await.unwrap();
        let (a_id, b_id) = (a.id.unwrap(), b.id.unwrap());
        assert!(b_id > a_id);
        assert_eq!(repo.find_by_id(a_id).await.unwrap(), Some(a.clone()));

        let mut moved = a.clone();
        moved.address = "Oak St".to_string();
        let updated = repo.save(moved.clone()).await.unwrap();
        assert_eq!(updated, moved);
        assert_eq!(repo.find_by_id(a_id).await.unwrap(), Some(moved));

        let all = repo.find_all().await.unwrap();
        let ids: Vec<_> = all.iter().filter_map(|p| p.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert!(ids.contains(&a_id) && ids.contains(&b_id));

        let unknown = PersonId::new(i64::MAX);
        repo.delete_by_id(unknown).await.unwrap();
        let err = repo
            .save(Person {
                id: Some(unknown),
                ..person("Cat", "Nowhere")
            })
            .await
            .unwrap_err();
        assert_eq!(err, RepositoryError::NotFound(unknown));
        assert_eq!(repo.find_by_id(unknown).await.unwrap(), None);

        repo.delete_by_id(a_id).await.unwrap();
        repo.delete_by_id(b_id).await.unwrap();
        assert_eq!(repo.find_by_id(a_id).await.unwrap(), None);
    }
}
