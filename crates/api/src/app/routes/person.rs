use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, OriginalUri, Path, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use peoplehub_core::PersonId;
use peoplehub_people::PersonVo;

use crate::app::errors;
use crate::app::services::AppServices;

/// Routes under the person collection path.
pub fn router() -> Router {
    Router::new()
        .route("/", get(find_all).post(create).put(update))
        .route("/:id", get(find_by_id).delete(delete))
}

pub async fn find_all(
    Extension(services): Extension<Arc<AppServices>>,
    OriginalUri(uri): OriginalUri,
) -> axum::response::Response {
    match services.people().find_all().await {
        Ok(people) => (StatusCode::OK, Json(people)).into_response(),
        Err(e) => errors::service_error_to_response(e, uri.path()),
    }
}

pub async fn find_by_id(
    Extension(services): Extension<Arc<AppServices>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, uri.path()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.people().find_by_id(id).await {
        Ok(vo) => (StatusCode::OK, Json(vo)).into_response(),
        Err(e) => errors::service_error_to_response(e, uri.path()),
    }
}

pub async fn create(
    Extension(services): Extension<Arc<AppServices>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<Option<PersonVo>>, JsonRejection>,
) -> axum::response::Response {
    let vo = match body {
        Ok(Json(vo)) => vo,
        Err(rejection) => return body_rejection(rejection, uri.path()),
    };

    match services.people().create(vo).await {
        Ok(vo) => (StatusCode::CREATED, Json(vo)).into_response(),
        Err(e) => errors::service_error_to_response(e, uri.path()),
    }
}

pub async fn update(
    Extension(services): Extension<Arc<AppServices>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<Option<PersonVo>>, JsonRejection>,
) -> axum::response::Response {
    let vo = match body {
        Ok(Json(vo)) => vo,
        Err(rejection) => return body_rejection(rejection, uri.path()),
    };

    match services.people().update(vo).await {
        Ok(vo) => (StatusCode::OK, Json(vo)).into_response(),
        Err(e) => errors::service_error_to_response(e, uri.path()),
    }
}

pub async fn delete(
    Extension(services): Extension<Arc<AppServices>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id, uri.path()) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.people().delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::service_error_to_response(e, uri.path()),
    }
}

fn parse_id(raw: &str, path: &str) -> Result<PersonId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid person id", path)
    })
}

fn body_rejection(rejection: JsonRejection, path: &str) -> axum::response::Response {
    errors::json_error(rejection.status(), "invalid_body", rejection.body_text(), path)
}
