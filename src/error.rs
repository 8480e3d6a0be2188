use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::error::Error;
use std::fmt;
use validator::ValidationErrors;

/// The primary error type for the application.
///
/// Consolidates every failure a request can run into and maps each to the
/// uniform `{code, message}` error envelope.
#[derive(Debug)]
pub enum AppError {
    /// The request body could not be parsed into the expected shape.
    MalformedPayload(String),
    /// The body parsed, but one or more field rules are violated.
    Validation(ValidationErrors),
    /// A lookup by id yielded no row.
    NotFound(String),
    /// Any database/driver failure. The message is logged, never returned.
    Database(String),
    /// Unexpected internal errors.
    Internal(anyhow::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation failed: {}", errors),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::Database(msg) => write!(f, "Database error: {}", msg),
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Internal(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::MalformedPayload(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INCORRECT_REQUEST_BODY", msg, None)
            }
            AppError::Validation(errors) => {
                // Every violated rule is reported, not just the first one
                let mut details = Vec::new();
                for (field, field_errors) in errors.field_errors() {
                    for e in field_errors {
                        details.push(json!({ "field": field.to_string(), "rule": e.code.to_string() }));
                    }
                }
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_FAILED",
                    "request validation failed".to_string(),
                    Some(json!(details)),
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg, None),
            AppError::Database(msg) => {
                // Log internally, surface an opaque message to the caller
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "an internal server error occurred".to_string(),
                    None,
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "an internal server error occurred".to_string(),
                    None,
                )
            }
        };

        let mut body = json!({
            "code": code,
            "message": message,
        });
        if let Some(details) = details {
            body["details"] = details;
        }

        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("record not found".to_string()),
            sqlx::Error::Database(db_err) => AppError::Database(db_err.message().to_string()),
            _ => AppError::Database(format!("{}", err)),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::MalformedPayload(rejection.body_text())
    }
}

/// A type alias for `Result<T, AppError>`, used throughout the application.
pub type AppResult<T> = Result<T, AppError>;

/// An extension trait for `Option` that converts `None` into a `NotFound`
/// error naming the missing entity.
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(format!("{} not found", entity)))
    }
}
