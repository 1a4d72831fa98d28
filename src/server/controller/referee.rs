use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, MessageDto},
        referee::{RefereeDto, RefereeListDto, RefereePayloadDto},
    },
    server::{
        error::AppError,
        model::referee::RefereeParam,
        service::referee::{
            REFEREE_CREATED, REFEREE_DELETED, REFEREE_NOT_FOUND, REFEREE_UPDATED, RefereeService,
        },
        state::AppState,
        util::{parse::parse_id, payload::Payload},
    },
};

pub static REFEREE_TAG: &str = "referee";

#[utoipa::path(
    post,
    path = "/referees",
    tag = REFEREE_TAG,
    request_body = RefereePayloadDto,
    responses(
        (status = 201, description = "Successfully created referee", body = DataDto<RefereeDto>),
        (status = 400, description = "Invalid payload", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_referee(
    State(state): State<AppState>,
    Payload(payload): Payload<RefereePayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let referee = RefereeService::new(&state.db)
        .create(RefereeParam::from(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::created(REFEREE_CREATED, referee.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/referees/{id}",
    tag = REFEREE_TAG,
    params(
        ("id" = String, Path, description = "Referee ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved referee", body = DataDto<RefereeDto>),
        (status = 404, description = "Referee not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_referee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, REFEREE_NOT_FOUND)?;

    let referee = RefereeService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(referee.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/referees",
    tag = REFEREE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved referees", body = DataDto<RefereeListDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_referees(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let referees = RefereeService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|referee| referee.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(DataDto::new(RefereeListDto { referees }))))
}

#[utoipa::path(
    put,
    path = "/referees/{id}",
    tag = REFEREE_TAG,
    params(
        ("id" = String, Path, description = "Referee ID")
    ),
    request_body = RefereePayloadDto,
    responses(
        (status = 200, description = "Successfully updated referee", body = MessageDto),
        (status = 400, description = "Invalid payload or input data", body = MessageDto),
        (status = 404, description = "Referee not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_referee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Payload<RefereePayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, REFEREE_NOT_FOUND)?;
    let service = RefereeService::new(&state.db);
    service.get(id).await?;
    let Payload(payload) = payload?;

    service.update(id, RefereeParam::from(payload)).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(REFEREE_UPDATED))))
}

#[utoipa::path(
    delete,
    path = "/referees/{id}",
    tag = REFEREE_TAG,
    params(
        ("id" = String, Path, description = "Referee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted referee", body = MessageDto),
        (status = 400, description = "Referee could not be deleted", body = MessageDto),
        (status = 404, description = "Referee not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_referee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, REFEREE_NOT_FOUND)?;

    RefereeService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(REFEREE_DELETED))))
}
