use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, MessageDto},
        club::{ClubDto, ClubListDto, ClubPayloadDto},
    },
    server::{
        error::AppError,
        model::club::ClubParam,
        service::club::{CLUB_CREATED, CLUB_DELETED, CLUB_NOT_FOUND, CLUB_UPDATED, ClubService},
        state::AppState,
        util::{parse::parse_id, payload::Payload},
    },
};

pub static CLUB_TAG: &str = "club";

/// Register a club under its federation stamnumber.
#[utoipa::path(
    post,
    path = "/clubs",
    tag = CLUB_TAG,
    request_body = ClubPayloadDto,
    responses(
        (status = 201, description = "Successfully created club", body = DataDto<ClubDto>),
        (status = 400, description = "Invalid payload", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_club(
    State(state): State<AppState>,
    Payload(payload): Payload<ClubPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let club = ClubService::new(&state.db)
        .create(ClubParam::from(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::created(CLUB_CREATED, club.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/clubs/{stamnumber}",
    tag = CLUB_TAG,
    params(
        ("stamnumber" = String, Path, description = "Club stamnumber")
    ),
    responses(
        (status = 200, description = "Successfully retrieved club", body = DataDto<ClubDto>),
        (status = 404, description = "Club not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_club(
    State(state): State<AppState>,
    Path(stamnumber): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let stamnumber = parse_id(&stamnumber, CLUB_NOT_FOUND)?;

    let club = ClubService::new(&state.db).get(stamnumber).await?;

    Ok((StatusCode::OK, Json(DataDto::new(club.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/clubs",
    tag = CLUB_TAG,
    responses(
        (status = 200, description = "Successfully retrieved clubs", body = DataDto<ClubListDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_clubs(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let clubs = ClubService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|club| club.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(DataDto::new(ClubListDto { clubs }))))
}

/// Replace a club.
///
/// The stamnumber may change; the club's teams are moved along with it.
#[utoipa::path(
    put,
    path = "/clubs/{stamnumber}",
    tag = CLUB_TAG,
    params(
        ("stamnumber" = String, Path, description = "Club stamnumber")
    ),
    request_body = ClubPayloadDto,
    responses(
        (status = 200, description = "Successfully updated club", body = MessageDto),
        (status = 400, description = "Invalid payload or input data", body = MessageDto),
        (status = 404, description = "Club not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_club(
    State(state): State<AppState>,
    Path(stamnumber): Path<String>,
    payload: Result<Payload<ClubPayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let stamnumber = parse_id(&stamnumber, CLUB_NOT_FOUND)?;
    let service = ClubService::new(&state.db);
    service.get(stamnumber).await?;
    let Payload(payload) = payload?;

    service.update(stamnumber, ClubParam::from(payload)).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(CLUB_UPDATED))))
}

/// Delete a club together with all of its teams.
#[utoipa::path(
    delete,
    path = "/clubs/{stamnumber}",
    tag = CLUB_TAG,
    params(
        ("stamnumber" = String, Path, description = "Club stamnumber")
    ),
    responses(
        (status = 200, description = "Successfully deleted club", body = MessageDto),
        (status = 400, description = "Club could not be deleted", body = MessageDto),
        (status = 404, description = "Club not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_club(
    State(state): State<AppState>,
    Path(stamnumber): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let stamnumber = parse_id(&stamnumber, CLUB_NOT_FOUND)?;

    ClubService::new(&state.db).delete(stamnumber).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(CLUB_DELETED))))
}
