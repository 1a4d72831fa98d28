use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

/// Liveness check, mounted as `/{resource}/ping` on every resource.
pub async fn ping() -> impl IntoResponse {
    (StatusCode::OK, Json(MessageDto::success("pong!")))
}
