//! REST error mapping.
//!
//! Domain errors become RFC 9457 problem responses; internals are logged
//! here and never leaked to the client.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::error::DomainError;

pub type ApiResult<T> = Result<T, Problem>;

/// RFC 9457 problem details body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Problem {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

impl Problem {
    fn new(status: StatusCode, code: &'static str, title: &'static str, detail: String) -> Self {
        let trace_id = tracing::Span::current()
            .id()
            .map(|id| id.into_u64().to_string());

        Self {
            problem_type: format!("https://errors.hotels.dev/{code}"),
            title: title.to_owned(),
            status: status.as_u16(),
            detail,
            code: code.to_owned(),
            trace_id,
        }
    }
}

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        match &e {
            DomainError::NotFound { entity, key } => Self::new(
                StatusCode::NOT_FOUND,
                "HOTELS_NOT_FOUND",
                "Entity not found",
                format!("{entity} not found: {key}"),
            ),
            DomainError::AlreadyExists { entity, key } => Self::new(
                StatusCode::CONFLICT,
                "HOTELS_ALREADY_EXISTS",
                "Entity already exists",
                format!("{entity} already exists: {key}"),
            ),
            DomainError::Validation { field, message } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "HOTELS_VALIDATION_FAILED",
                "Validation failed",
                format!("'{field}': {message}"),
            ),
            DomainError::Internal(err) => {
                tracing::error!(error = ?err, "internal error in hotels-service");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "HOTELS_INTERNAL",
                    "Internal Server Error",
                    "An internal error occurred".to_owned(),
                )
            }
        }
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, Json(self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/problem+json"),
        );
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let problem: Problem = DomainError::not_found("hotel", "42").into();
        assert_eq!(problem.status, 404);
        assert_eq!(problem.code, "HOTELS_NOT_FOUND");
        assert!(problem.detail.contains("hotel"));
    }

    #[test]
    fn test_already_exists_maps_to_409() {
        let problem: Problem = DomainError::already_exists("director", "Ivanov").into();
        assert_eq!(problem.status, 409);
        assert_eq!(problem.code, "HOTELS_ALREADY_EXISTS");
    }

    #[test]
    fn test_internal_error_detail_is_not_leaked() {
        let problem: Problem =
            DomainError::Internal(anyhow::anyhow!("connection string with secrets")).into();
        assert_eq!(problem.status, 500);
        assert!(!problem.detail.contains("secrets"));
    }
}
