//! Error types and HTTP response handling.
//!
//! Lifecycle errors (`ConfigError`, `DatabaseError`, `StartupError`) never reach a
//! client; the process entry point and the lifecycle controller log them and turn
//! them into an exit status. `AppError` covers the request path and implements
//! `IntoResponse` so that route handlers can return it directly.

pub mod config;
pub mod database;
pub mod startup;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request-level application error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Route group mounted without a handler implementation.
    ///
    /// Results in 501 Not Implemented naming the resource group.
    ///
    /// # Fields
    /// - Name of the resource group that received the request
    #[error("The {0} resource has no handlers mounted")]
    NotImplemented(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound` variant
/// - 501 Not Implemented - For `NotImplemented` variant
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
