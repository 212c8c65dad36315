//! Domain-error to HTTP-response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::DomainError;

/// JSON error body: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Wrapper that turns a `DomainError` into an HTTP response.
///
/// Handlers return `Result<_, ApiError>` and propagate service errors
/// with `?`; the status code mapping lives in one place.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::Conflict(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::Storage(msg) => {
                error!("storage failure: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(e: DomainError) -> StatusCode {
        ApiError(e).into_response().status()
    }

    #[test]
    fn status_code_mapping() {
        assert_eq!(
            status_of(DomainError::user_not_found(1)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(DomainError::Conflict("dup".into())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(DomainError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(DomainError::Storage("down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
