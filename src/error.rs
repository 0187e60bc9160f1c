//! Application error type and HTTP response mapping.
//!
//! Every failure in the service is expressed as an [`AppError`]. The repository
//! translates raw storage errors into the matching variant where discernible
//! (unique violation, no rows) and the service adds domain-level context on top.
//! Nothing is retried automatically; every error is scoped to a single request.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned for every error response: a human-readable message plus
/// an error detail string.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub error: String,
}

/// Service-wide error taxonomy.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Empty or malformed input (missing field, empty token).
    #[error("{message}: {detail}")]
    InvalidArgument { message: String, detail: String },

    /// Domain-rule violation (invalid or self-referential URL).
    #[error("{message}: {detail}")]
    Validation { message: String, detail: String },

    /// The requested token does not exist.
    #[error("{message}: {detail}")]
    NotFound { message: String, detail: String },

    /// Storage uniqueness violation (duplicate short token).
    #[error("{message}: {detail}")]
    Conflict { message: String, detail: String },

    /// A click-count increment unexpectedly touched zero rows.
    #[error("{message}: {detail}")]
    UpdateFailed { message: String, detail: String },

    /// Any other persistence or internal failure.
    #[error("{message}: {detail}")]
    Internal { message: String, detail: String },
}

impl AppError {
    pub fn invalid_argument(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn validation(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn not_found(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn conflict(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn update_failed(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::UpdateFailed {
            message: message.into(),
            detail: detail.into(),
        }
    }

    pub fn internal(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::InvalidArgument { message, detail } => {
                (StatusCode::BAD_REQUEST, message, detail)
            }
            AppError::Validation { message, detail } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message, detail)
            }
            AppError::NotFound { message, detail } => (StatusCode::NOT_FOUND, message, detail),
            AppError::Conflict { message, detail } => (StatusCode::CONFLICT, message, detail),
            AppError::UpdateFailed { message, detail } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, detail)
            }
            AppError::Internal { message, detail } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, detail)
            }
        };

        let body = ErrorBody {
            message,
            error: detail,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::validation("URL validation failed", e.to_string())
    }
}

/// Translates raw sqlx errors into the application taxonomy.
///
/// Unique-constraint violations become [`AppError::Conflict`]; a missing row
/// becomes [`AppError::NotFound`]; everything else is reported as an internal
/// storage failure without leaking driver detail to the client.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Short token already exists",
            db.constraint().unwrap_or("unique constraint").to_string(),
        );
    }

    if matches!(e, sqlx::Error::RowNotFound) {
        return AppError::not_found("Record not found", "no rows matched the query");
    }

    tracing::error!("database error: {e}");
    AppError::internal("Database error", "storage operation failed")
}
