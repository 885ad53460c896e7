use axum::http::StatusCode;
use recs_core::service::ServiceError;
use tracing::{Level, event};

/// Translate a core service error into an HTTP response pair.
///
/// Client-input failures map to 4xx with their own message. Integrity
/// violations and store failures are internal conditions: they are logged
/// at ERROR here, close to where they surface, and callers only see a 500.
pub(crate) fn to_response<E>(err: ServiceError<E>) -> (StatusCode, String)
where
    E: std::error::Error + Send + Sync + 'static,
{
    match &err {
        ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        ServiceError::DuplicateInterest { .. } => (StatusCode::BAD_REQUEST, err.to_string()),
        ServiceError::IntegrityViolation { .. } => {
            event!(Level::ERROR, err = err.to_string(), "integrity violation");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
        ServiceError::Store(inner) => {
            event!(Level::ERROR, err = inner.to_string());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "store failure".to_string(),
            )
        }
    }
}

/// Shorthand for routes that call the repository directly.
pub(crate) fn store_failure<E>(err: E) -> (StatusCode, String)
where
    E: std::error::Error + Send + Sync + 'static,
{
    to_response(ServiceError::Store(err))
}
