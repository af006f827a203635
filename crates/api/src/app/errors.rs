use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::Utc;

use peoplehub_people::PersonServiceError;

use crate::app::dto::ErrorBody;

pub fn service_error_to_response(err: PersonServiceError, path: &str) -> axum::response::Response {
    match &err {
        PersonServiceError::RequiredObjectIsNull => json_error(
            StatusCode::BAD_REQUEST,
            "required_object_is_null",
            err.to_string(),
            path,
        ),
        PersonServiceError::ResourceNotFound { .. } => {
            json_error(StatusCode::NOT_FOUND, "not_found", err.to_string(), path)
        }
        PersonServiceError::MissingKey => {
            tracing::error!(error = %err, "stored person without identifier");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                err.to_string(),
                path,
            )
        }
        PersonServiceError::Repository(e) => {
            tracing::error!(error = %e, "person storage failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                e.to_string(),
                path,
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
    details: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(ErrorBody {
            timestamp: Utc::now().to_rfc3339(),
            error: code.to_string(),
            message: message.into(),
            details: details.into(),
        }),
    )
        .into_response()
}
