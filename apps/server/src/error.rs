use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use xrates_core::errors::{Error as CoreError, ValidationError};

/// Errors returned by handlers. Bodies are plain text.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Validation(e) => (StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
            ApiError::Core(e) => match e {
                CoreError::Validation(inner) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, inner.to_string())
                }
                CoreError::Database(inner) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("data unavailable: {}", inner),
                ),
                CoreError::Unavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, e.to_string()),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            },
        };
        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, msg);
        }
        (status, msg).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use xrates_core::errors::{DatabaseError, FieldError};

    #[test]
    fn maps_errors_to_status_codes() {
        let status = |e: ApiError| e.into_response().status();

        assert_eq!(
            status(ValidationError::InvalidFields(vec![FieldError::new("base", "x")]).into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status(CoreError::Database(DatabaseError::QueryFailed("x".into())).into()),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status(CoreError::Unavailable("x".into()).into()),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status(CoreError::InvalidQuoteSet("x".into()).into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
