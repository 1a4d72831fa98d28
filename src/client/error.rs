//! Client service errors, rendered as HTML pages.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::{
    client::{component::layout, model::error::ApiError},
    server::error::config::ConfigError,
};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No access cookie was sent.
    #[error("Not logged in")]
    MissingToken,

    /// The token is expired, has a bad signature or is of the wrong kind.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The user is logged in but lacks the right to do this.
    #[error("{0}")]
    AccessDenied(String),
}

#[derive(Error, Debug)]
pub enum ClientError {
    /// A backend service or the weather API failed or refused the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Token could not be signed.
    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),
}

/// Renders errors as HTML pages.
///
/// - Missing or invalid tokens redirect to `/login`
/// - `AccessDenied` is a 403
/// - Backend failures keep the backend's 400/404 and message, anything else from a
///   backend is a 502
/// - Remaining errors are logged and shown as a generic 500
impl IntoResponse for ClientError {
    fn into_response(self) -> Response {
        match self {
            Self::Auth(AuthError::MissingToken) => Redirect::to("/login").into_response(),
            Self::Auth(AuthError::InvalidToken(reason)) => {
                tracing::debug!("Rejected token: {}", reason);
                Redirect::to("/login").into_response()
            }
            Self::Auth(AuthError::AccessDenied(message)) => {
                error_page(StatusCode::FORBIDDEN, &message)
            }
            Self::NotFound(message) => error_page(StatusCode::NOT_FOUND, &message),
            Self::BadRequest(message) => error_page(StatusCode::BAD_REQUEST, &message),
            Self::Api(err) => {
                let status = match err.status {
                    400 => StatusCode::BAD_REQUEST,
                    404 => StatusCode::NOT_FOUND,
                    _ => {
                        tracing::error!("Backend call failed with {}: {}", err.status, err.message);
                        StatusCode::BAD_GATEWAY
                    }
                };
                error_page(status, &err.message)
            }
            err => {
                tracing::error!("{}", err);
                error_page(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong.")
            }
        }
    }
}

fn error_page(status: StatusCode, message: &str) -> Response {
    let title = status.canonical_reason().unwrap_or("Error");
    let body = format!("<p class=\"error\">{}</p>", layout::escape(message));

    (status, layout::page(title, None, &body)).into_response()
}
