//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Startup
    #[error("Configuration error: {0}")]
    Configuration(String),

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("A user with email {0} already exists")]
    DuplicateEmail(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // Store failures are not differentiated further
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::NotFound => "NOT_FOUND",
            AppError::DuplicateEmail(_) => "DUPLICATE_EMAIL",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) | AppError::Database(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Configuration(msg) | AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn duplicate_email(email: impl Into<String>) -> Self {
        AppError::DuplicateEmail(email.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_error_kind() {
        assert_eq!(AppError::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::duplicate_email("a@b.c").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::validation("bad").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Database(sea_orm::DbErr::Custom("boom".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn database_details_are_hidden_from_clients() {
        let err = AppError::Database(sea_orm::DbErr::Custom("secret table".into()));
        assert_eq!(err.user_message(), "A database error occurred");
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn duplicate_email_message_names_the_email() {
        let err = AppError::duplicate_email("john.doe@example.com");
        assert_eq!(
            err.user_message(),
            "A user with email john.doe@example.com already exists"
        );
    }

    #[test]
    fn empty_option_maps_to_not_found() {
        let missing: Option<i32> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
        assert_eq!(Some(3).ok_or_not_found().unwrap(), 3);
    }
}
