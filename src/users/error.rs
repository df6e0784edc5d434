use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::users::{dto::ErrorResponse, validation::ValidationErrors};

/// Failures reported by a [`UserStore`](crate::users::store::UserStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user not found")]
    NotFound,

    #[error("user with this email already exists")]
    Conflict,

    #[error("{op}: {source}")]
    Storage {
        op: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{op}: deadline of {timeout:?} exceeded")]
    Timeout { op: &'static str, timeout: Duration },
}

impl StoreError {
    pub(crate) fn storage(op: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| StoreError::Storage { op, source }
    }
}

#[derive(Debug, Error)]
pub enum UserError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("failed to hash password: {0}")]
    Hashing(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl UserError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, UserError::Store(StoreError::NotFound))
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            UserError::Validation(errors) => {
                warn!(error = %errors, "invalid request");
                let mut body = ErrorResponse::new("invalid request");
                body.fields = errors.into_violations();
                (StatusCode::BAD_REQUEST, body)
            }
            UserError::Hashing(e) => {
                error!(error = %e, "hash_password failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("failed to hash password"),
                )
            }
            UserError::Store(StoreError::NotFound) => {
                (StatusCode::NOT_FOUND, ErrorResponse::new("user not found"))
            }
            UserError::Store(StoreError::Conflict) => {
                warn!("email already registered");
                (StatusCode::CONFLICT, ErrorResponse::new("user already exists"))
            }
            UserError::Store(e) => {
                error!(error = %e, "user store failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("internal error"),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
