use std::sync::Arc;

use peoplehub_infra::{InMemoryPersonRepository, PostgresPersonRepository};
use peoplehub_people::{PersonRepository, PersonService, RepositoryError};

use crate::config::ApiConfig;

/// Person service over a type-erased repository.
pub type SharedPersonService = PersonService<Arc<dyn PersonRepository>>;

/// Which repository adapter backs the service.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    InMemory,
    Postgres,
}

impl StorageBackend {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageBackend::InMemory => "in_memory",
            StorageBackend::Postgres => "postgres",
        }
    }
}

pub struct AppServices {
    people: SharedPersonService,
    backend: StorageBackend,
}

impl AppServices {
    pub fn new(repository: Arc<dyn PersonRepository>, backend: StorageBackend) -> Self {
        Self {
            people: PersonService::new(repository),
            backend,
        }
    }

    /// In-memory wiring (dev/test), optionally pre-seeded.
    pub fn in_memory(repository: InMemoryPersonRepository) -> Self {
        Self::new(Arc::new(repository), StorageBackend::InMemory)
    }

    pub fn people(&self) -> &SharedPersonService {
        &self.people
    }

    pub fn backend(&self) -> StorageBackend {
        self.backend
    }
}

/// Pick the repository adapter from configuration.
///
/// Without `DATABASE_URL` everything lives in memory and is lost on restart.
pub async fn build_services(config: &ApiConfig) -> Result<AppServices, RepositoryError> {
    match &config.database_url {
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory person storage");
            Ok(AppServices::in_memory(InMemoryPersonRepository::new()))
        }
        Some(url) => {
            let repo = PostgresPersonRepository::connect(url, config.database_max_connections).await?;
            repo.ensure_schema().await?;
            tracing::info!("connected to postgres person storage");
            Ok(AppServices::new(Arc::new(repo), StorageBackend::Postgres))
        }
    }
}
