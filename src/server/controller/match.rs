use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, MessageDto},
        r#match::{MatchDto, MatchListDto, MatchPayloadDto},
    },
    server::{
        error::AppError,
        model::r#match::MatchParam,
        service::r#match::{
            MatchService, MATCH_CREATED, MATCH_DELETED, MATCH_NOT_FOUND, MATCH_UPDATED,
        },
        state::AppState,
        util::{parse::parse_id, payload::Payload},
    },
};

pub static MATCH_TAG: &str = "match";

/// Schedule a new match.
///
/// The assigned referee, if any, must not already be booked for another match at the
/// same date and time.
///
/// # Returns
/// - `201 Created` - Match created, echoed back in `data`
/// - `400 Bad Request` - Invalid payload or referee double booked
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/matches",
    tag = MATCH_TAG,
    request_body = MatchPayloadDto,
    responses(
        (status = 201, description = "Successfully created match", body = DataDto<MatchDto>),
        (status = 400, description = "Invalid payload", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    Payload(payload): Payload<MatchPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let fixture = MatchService::new(&state.db)
        .create(MatchParam::from(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::created(MATCH_CREATED, fixture.into_dto())),
    ))
}

/// Fetch a single match by id.
#[utoipa::path(
    get,
    path = "/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = String, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved match", body = DataDto<MatchDto>),
        (status = 404, description = "Match not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, MATCH_NOT_FOUND)?;

    let fixture = MatchService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(fixture.into_dto()))))
}

/// List every match ordered by id.
#[utoipa::path(
    get,
    path = "/matches",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "Successfully retrieved matches", body = DataDto<MatchListDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_matches(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let matches = MatchService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|m| m.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(DataDto::new(MatchListDto { matches }))))
}

/// Replace a match.
///
/// Used for rescheduling as well as entering scores and assigning referees. The
/// double-booking check ignores the match being updated. An unknown id is reported
/// before a malformed body.
///
/// # Returns
/// - `200 OK` - Match updated
/// - `400 Bad Request` - Invalid payload, referee double booked or constraint failure
/// - `404 Not Found` - No match with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = String, Path, description = "Match ID")
    ),
    request_body = MatchPayloadDto,
    responses(
        (status = 200, description = "Successfully updated match", body = MessageDto),
        (status = 400, description = "Invalid payload or input data", body = MessageDto),
        (status = 404, description = "Match not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Payload<MatchPayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, MATCH_NOT_FOUND)?;
    let service = MatchService::new(&state.db);
    service.get(id).await?;
    let Payload(payload) = payload?;

    service.update(id, MatchParam::from(payload)).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(MATCH_UPDATED))))
}

#[utoipa::path(
    delete,
    path = "/matches/{id}",
    tag = MATCH_TAG,
    params(
        ("id" = String, Path, description = "Match ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted match", body = MessageDto),
        (status = 400, description = "Match could not be deleted", body = MessageDto),
        (status = 404, description = "Match not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, MATCH_NOT_FOUND)?;

    MatchService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(MATCH_DELETED))))
}
