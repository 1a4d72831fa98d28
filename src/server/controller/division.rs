use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, MessageDto},
        division::{DivisionDto, DivisionListDto, DivisionPayloadDto},
    },
    server::{
        error::AppError,
        model::division::DivisionParam,
        service::division::{
            DivisionService, DIVISION_CREATED, DIVISION_DELETED, DIVISION_NOT_FOUND,
            DIVISION_UPDATED,
        },
        state::AppState,
        util::{parse::parse_id, payload::Payload},
    },
};

pub static DIVISION_TAG: &str = "division";

#[utoipa::path(
    post,
    path = "/divisions",
    tag = DIVISION_TAG,
    request_body = DivisionPayloadDto,
    responses(
        (status = 201, description = "Successfully created division", body = DataDto<DivisionDto>),
        (status = 400, description = "Invalid payload", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_division(
    State(state): State<AppState>,
    Payload(payload): Payload<DivisionPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let division = DivisionService::new(&state.db)
        .create(DivisionParam::from(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::created(DIVISION_CREATED, division.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/divisions/{id}",
    tag = DIVISION_TAG,
    params(
        ("id" = String, Path, description = "Division ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved division", body = DataDto<DivisionDto>),
        (status = 404, description = "Division not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_division(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, DIVISION_NOT_FOUND)?;

    let division = DivisionService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(division.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/divisions",
    tag = DIVISION_TAG,
    responses(
        (status = 200, description = "Successfully retrieved divisions", body = DataDto<DivisionListDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_divisions(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let divisions = DivisionService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|division| division.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(DataDto::new(DivisionListDto { divisions }))))
}

#[utoipa::path(
    put,
    path = "/divisions/{id}",
    tag = DIVISION_TAG,
    params(
        ("id" = String, Path, description = "Division ID")
    ),
    request_body = DivisionPayloadDto,
    responses(
        (status = 200, description = "Successfully updated division", body = MessageDto),
        (status = 400, description = "Invalid payload or input data", body = MessageDto),
        (status = 404, description = "Division not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_division(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Payload<DivisionPayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, DIVISION_NOT_FOUND)?;
    let service = DivisionService::new(&state.db);
    service.get(id).await?;
    let Payload(payload) = payload?;

    service.update(id, DivisionParam::from(payload)).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(DIVISION_UPDATED))))
}

/// Delete a division. Fails while any match still references it.
#[utoipa::path(
    delete,
    path = "/divisions/{id}",
    tag = DIVISION_TAG,
    params(
        ("id" = String, Path, description = "Division ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted division", body = MessageDto),
        (status = 400, description = "Division could not be deleted", body = MessageDto),
        (status = 404, description = "Division not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_division(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, DIVISION_NOT_FOUND)?;

    DivisionService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(DIVISION_DELETED))))
}
