//! Unified error types for the toy store API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Errors raised by services and repositories
//! - `AppError`: HTTP-facing errors (wraps domain errors for responses)
//!
//! `AppError`'s `IntoResponse` impl is the single place where errors become
//! status codes and `{"message": ...}` bodies.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::entities::{ToyBuildError, ToyId, UserId};

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const USER_NOT_FOUND: &str = "User not found";
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Product not found: {0}")]
    ProductNotFound(ToyId),

    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Database error: {0}")]
    Database(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl From<ToyBuildError> for AppError {
    fn from(e: ToyBuildError) -> Self {
        AppError::BadRequest(e.to_string())
    }
}

/// Error response body for JSON responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Domain(DomainError::ProductNotFound(id)) => {
                tracing::debug!(product_id = %id, "Product not found");
                (StatusCode::NOT_FOUND, PRODUCT_NOT_FOUND.to_string())
            }
            AppError::Domain(DomainError::UserNotFound(id)) => {
                tracing::debug!(user_id = %id, "User not found");
                (StatusCode::NOT_FOUND, USER_NOT_FOUND.to_string())
            }
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_SERVER_ERROR.to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
