//! Error types and HTTP response handling.
//!
//! This module provides the backend error hierarchy and conversion logic for
//! transforming errors into HTTP responses. Every failure is surfaced to the caller
//! as a `{"status": "fail", "message": ...}` envelope.

pub mod config;
pub mod seed;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::MessageDto,
    server::error::{config::ConfigError, seed::SeedError},
};

/// Message returned when a request body is missing or cannot be deserialized.
pub const INVALID_PAYLOAD: &str = "Invalid payload.";

/// Message returned when a write violates a store constraint.
pub const INVALID_INPUT_DATA: &str = "Invalid input data";

/// Top-level backend error type.
///
/// Aggregates all possible error types raised by the backend services and provides
/// automatic conversion to HTTP responses. Library errors use `#[from]` for
/// automatic conversion and always map to 500, while the domain variants carry the
/// message returned to the caller.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure to bind the listener or read a seed file.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Seed file that is not valid CSV.
    #[error(transparent)]
    CsvErr(#[from] csv::Error),

    /// Seed file row with a missing or unparsable value.
    #[error(transparent)]
    SeedErr(#[from] SeedError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, including integrity violations.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request body missing a required field or carrying a field of the wrong type.
    ///
    /// Results in 400 Bad Request with `"Invalid payload."`.
    #[error("Invalid payload.")]
    InvalidPayload,

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Maps a constraint violation raised by the store to a 400 with `message`.
    ///
    /// Any other database error is kept as a 500.
    pub fn from_constraint(err: sea_orm::DbErr, message: &str) -> Self {
        match err.sql_err() {
            Some(_) => {
                tracing::debug!("Constraint violation: {}", err);
                Self::BadRequest(message.to_string())
            }
            None => Self::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `InvalidPayload`
/// - 404 Not Found - For `NotFound`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(MessageDto::fail(msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(MessageDto::fail(msg))).into_response()
            }
            Self::InvalidPayload => {
                (StatusCode::BAD_REQUEST, Json(MessageDto::fail(INVALID_PAYLOAD))).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageDto::fail("Internal server error")),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(MessageDto::fail("Internal server error")),
        )
            .into_response()
    }
}
