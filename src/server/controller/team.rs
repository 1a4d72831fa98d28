use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, MessageDto},
        team::{TeamDto, TeamListDto, TeamPayloadDto},
    },
    server::{
        error::AppError,
        model::team::TeamParam,
        service::team::{TEAM_CREATED, TEAM_DELETED, TEAM_NOT_FOUND, TEAM_UPDATED, TeamService},
        state::AppState,
        util::{parse::parse_id, payload::Payload},
    },
};

pub static TEAM_TAG: &str = "team";

/// Create a team for an existing club.
#[utoipa::path(
    post,
    path = "/teams",
    tag = TEAM_TAG,
    request_body = TeamPayloadDto,
    responses(
        (status = 201, description = "Successfully created team", body = DataDto<TeamDto>),
        (status = 400, description = "Invalid payload", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    Payload(payload): Payload<TeamPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db)
        .create(TeamParam::from(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::created(TEAM_CREATED, team.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = String, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved team", body = DataDto<TeamDto>),
        (status = 404, description = "Team not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, TEAM_NOT_FOUND)?;

    let team = TeamService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(team.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved teams", body = DataDto<TeamListDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_teams(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let teams = TeamService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|team| team.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(DataDto::new(TeamListDto { teams }))))
}

#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = String, Path, description = "Team ID")
    ),
    request_body = TeamPayloadDto,
    responses(
        (status = 200, description = "Successfully updated team", body = MessageDto),
        (status = 400, description = "Invalid payload or input data", body = MessageDto),
        (status = 404, description = "Team not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Payload<TeamPayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, TEAM_NOT_FOUND)?;
    let service = TeamService::new(&state.db);
    service.get(id).await?;
    let Payload(payload) = payload?;

    service.update(id, TeamParam::from(payload)).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(TEAM_UPDATED))))
}

#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = TEAM_TAG,
    params(
        ("id" = String, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted team", body = MessageDto),
        (status = 400, description = "Team could not be deleted", body = MessageDto),
        (status = 404, description = "Team not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, TEAM_NOT_FOUND)?;

    TeamService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(TEAM_DELETED))))
}
