use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;
use log::error;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Body of every non-2xx response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub message: String,
}

/// Application-level error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("authentication required")]
    Unauthorized,

    #[error("wrong username or password")]
    InvalidCredentials,

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn forbidden() -> Self {
        Self::Forbidden("you are not allowed to do that".to_owned())
    }

    fn code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Unauthorized | Self::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "unauthorized")
            }
            Self::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            Self::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            Self::Validation(_) => (StatusCode::BAD_REQUEST, "validation"),
            Self::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.code();

        // Server-side causes are logged, the client gets a generic message
        let message = match &self {
            Self::Database(cause) | Self::Internal(cause) => {
                error!("{code} error: {cause}");
                "Internal server error".to_owned()
            }
            other => other.to_string(),
        };

        (status, Json(ErrorResponse { error: code, message })).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound { .. } => Self::NotFound(e.to_string()),
            ServiceError::Conflict(msg) => Self::Conflict(msg),
            ServiceError::Validation(msg) => Self::Validation(msg),
            ServiceError::PasswordHash(msg) => Self::Internal(msg),
            ServiceError::Database(db_err) => Self::Database(db_err.to_string()),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
