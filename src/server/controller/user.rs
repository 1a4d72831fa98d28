use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, MessageDto},
        user::{UserDto, UserListDto, UserPayloadDto},
    },
    server::{
        error::AppError,
        model::user::UserParam,
        service::user::{USER_DELETED, USER_NOT_FOUND, USER_UPDATED, UserService},
        state::AppState,
        util::{parse::parse_id, payload::Payload},
    },
};

pub static USER_TAG: &str = "user";

/// Register a user.
///
/// The success message echoes the new user's email.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = UserPayloadDto,
    responses(
        (status = 201, description = "Successfully created user", body = DataDto<UserDto>),
        (status = 400, description = "Invalid payload", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Payload(payload): Payload<UserPayloadDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(UserParam::from(payload))
        .await?;

    let message = format!("{} was added!", user.email);

    Ok((
        StatusCode::CREATED,
        Json(DataDto::created(message, user.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = DataDto<UserDto>),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, USER_NOT_FOUND)?;

    let user = UserService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(DataDto::new(user.into_dto()))))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = DataDto<UserListDto>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db)
        .get_all()
        .await?
        .into_iter()
        .map(|user| user.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(DataDto::new(UserListDto { users }))))
}

/// Replace a user. The email must stay unique across users.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UserPayloadDto,
    responses(
        (status = 200, description = "Successfully updated user", body = MessageDto),
        (status = 400, description = "Invalid payload or input data", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Payload<UserPayloadDto>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, USER_NOT_FOUND)?;
    let service = UserService::new(&state.db);
    service.get(id).await?;
    let Payload(payload) = payload?;

    service.update(id, UserParam::from(payload)).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(USER_UPDATED))))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = MessageDto),
        (status = 400, description = "User could not be deleted", body = MessageDto),
        (status = 404, description = "User not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id, USER_NOT_FOUND)?;

    UserService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::success(USER_DELETED))))
}
