use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, MessageDto},
        status::{StatusDto, StatusListDto, StatusPayloadDto},
    },
    server::{
        error::AppError,
        model::status::StatusParam,
        service::status::{
            STATUS_CREATED, STATUS_DELETED, STATUS_NOT_FOUND, STATUS_UPDATED, StatusService,
        },
        state::AppState,
        util::{parse::parse_id, payload::Payload},
    },
};

pub static STATUS_TAG: &str = "status";

#[utoipa::path(
    post,
    path = "/status",
    tag = STATUS_TAG,
    request_body = StatusPayloadDto,
    responses(
        (status = 201, description = "Successfully created status", body = DataDto<StatusDto>),
        (status = 400, description = "Invalid payload", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_status(
    State(state): State<AppState>,
    Payload(payload): Payload<StatusPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.db)
        .create(StatusParam::from(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::created(STATUS_CREATED, status.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/status/{id}",
    tag = STATUS_TAG,
    params(
        ("id" = String, Path, description = "Status ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved status", body = DataDto<StatusDto>),
        (status = 404, description = "Status not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, STATUS_NOT_FOUND)?;

    let status = StatusService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(status.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/status",
    tag = STATUS_TAG,
    responses(
        (status = 200, description = "Successfully retrieved status", body = DataDto<StatusListDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_status(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let status = StatusService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|status| status.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(DataDto::new(StatusListDto { status }))))
}

#[utoipa::path(
    put,
    path = "/status/{id}",
    tag = STATUS_TAG,
    params(
        ("id" = String, Path, description = "Status ID")
    ),
    request_body = StatusPayloadDto,
    responses(
        (status = 200, description = "Successfully updated status", body = MessageDto),
        (status = 400, description = "Invalid payload or input data", body = MessageDto),
        (status = 404, description = "Status not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Payload<StatusPayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, STATUS_NOT_FOUND)?;
    let service = StatusService::new(&state.db);
    service.get(id).await?;
    let Payload(payload) = payload?;

    service.update(id, StatusParam::from(payload)).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(STATUS_UPDATED))))
}

#[utoipa::path(
    delete,
    path = "/status/{id}",
    tag = STATUS_TAG,
    params(
        ("id" = String, Path, description = "Status ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted status", body = MessageDto),
        (status = 400, description = "Status could not be deleted", body = MessageDto),
        (status = 404, description = "Status not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, STATUS_NOT_FOUND)?;

    StatusService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(STATUS_DELETED))))
}
