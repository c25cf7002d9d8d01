//! Store errors and their JSON failure responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use shared_types::{ErrorBody, MSG_PROFILE_NOT_FOUND};
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("{}", MSG_PROFILE_NOT_FOUND)]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("store error: {0}")]
    Store(#[from] sqlx::Error),
}

impl ProfileError {
    fn is_internal(&self) -> bool {
        matches!(self, ProfileError::Store(_))
    }
}

/// A failed request: status plus the `{ "error": ... }` body.
#[derive(Debug)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub error: String,
}

impl ApiFailure {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
        }
    }

    /// Build a failure response for `err` with the route's failure status.
    /// Internal store details are logged, not returned.
    pub fn from_profile_error(status: StatusCode, err: ProfileError) -> Self {
        if err.is_internal() {
            error!(error = %err, "profile store failure");
            return Self::new(status, "internal store error");
        }
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.error })).into_response()
    }
}
