//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: repository selection and service construction
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: response bodies that are not domain views
//! - `errors.rs`: consistent error responses
//! - `openapi.rs`: API documentation document

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use peoplehub_people::{PERSON_BASE_PATH, RepositoryError};

use crate::config::ApiConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod openapi;
pub mod routes;
pub mod services;

/// Build the full HTTP router from configuration (entrypoint used by `main.rs`).
pub async fn build_app(config: &ApiConfig) -> Result<Router, RepositoryError> {
    let services = services::build_services(config).await?;
    Ok(router(Arc::new(services)))
}

/// Build the HTTP router around already-wired services.
pub fn router(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .route(openapi::API_DOCS_PATH, get(openapi::api_docs))
        .nest(PERSON_BASE_PATH, routes::person::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        )))
}
