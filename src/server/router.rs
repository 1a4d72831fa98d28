//! Route tables and OpenAPI documents of the three resource services.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{club, division, ping::ping, r#match, referee, status, team, user},
    state::AppState,
};

/// The resource service a backend process runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Users,
    Teams,
    Matches,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "League users service"),
    paths(
        user::create_user,
        user::get_user,
        user::get_all_users,
        user::update_user,
        user::delete_user,
    ),
    tags((name = "user", description = "User accounts"))
)]
pub struct UsersApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "League teams service"),
    paths(
        club::create_club,
        club::get_club,
        club::get_all_clubs,
        club::update_club,
        club::delete_club,
        team::create_team,
        team::get_team,
        team::get_all_teams,
        team::update_team,
        team::delete_team,
    ),
    tags(
        (name = "club", description = "Clubs, addressed by stamnumber"),
        (name = "team", description = "Teams fielded by clubs")
    )
)]
pub struct TeamsApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "League matches service"),
    paths(
        r#match::create_match,
        r#match::get_match,
        r#match::get_all_matches,
        r#match::update_match,
        r#match::delete_match,
        division::create_division,
        division::get_division,
        division::get_all_divisions,
        division::update_division,
        division::delete_division,
        referee::create_referee,
        referee::get_referee,
        referee::get_all_referees,
        referee::update_referee,
        referee::delete_referee,
        status::create_status,
        status::get_status,
        status::get_all_status,
        status::update_status,
        status::delete_status,
    ),
    tags(
        (name = "match", description = "Scheduled and played matches"),
        (name = "division", description = "League divisions"),
        (name = "referee", description = "Match officials"),
        (name = "status", description = "Match status values")
    )
)]
pub struct MatchesApiDoc;

pub fn users_router() -> Router<AppState> {
    Router::new()
        .route("/users/ping", get(ping))
        .route("/users", post(user::create_user).get(user::get_all_users))
        .route(
            "/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
}

pub fn teams_router() -> Router<AppState> {
    Router::new()
        .route("/clubs/ping", get(ping))
        .route("/clubs", post(club::create_club).get(club::get_all_clubs))
        .route(
            "/clubs/{stamnumber}",
            get(club::get_club)
                .put(club::update_club)
                .delete(club::delete_club),
        )
        .route("/teams/ping", get(ping))
        .route("/teams", post(team::create_team).get(team::get_all_teams))
        .route(
            "/teams/{id}",
            get(team::get_team)
                .put(team::update_team)
                .delete(team::delete_team),
        )
}

pub fn matches_router() -> Router<AppState> {
    Router::new()
        .route("/matches/ping", get(ping))
        .route(
            "/matches",
            post(r#match::create_match).get(r#match::get_all_matches),
        )
        .route(
            "/matches/{id}",
            get(r#match::get_match)
                .put(r#match::update_match)
                .delete(r#match::delete_match),
        )
        .route("/divisions/ping", get(ping))
        .route(
            "/divisions",
            post(division::create_division).get(division::get_all_divisions),
        )
        .route(
            "/divisions/{id}",
            get(division::get_division)
                .put(division::update_division)
                .delete(division::delete_division),
        )
        .route("/referees/ping", get(ping))
        .route(
            "/referees",
            post(referee::create_referee).get(referee::get_all_referees),
        )
        .route(
            "/referees/{id}",
            get(referee::get_referee)
                .put(referee::update_referee)
                .delete(referee::delete_referee),
        )
        .route("/status/ping", get(ping))
        .route(
            "/status",
            post(status::create_status).get(status::get_all_status),
        )
        .route(
            "/status/{id}",
            get(status::get_status)
                .put(status::update_status)
                .delete(status::delete_status),
        )
}

/// Builds the complete router of `backend`: resource routes, Swagger UI at `/docs`
/// and the request tracing and CORS layers.
pub fn router(backend: Backend, state: AppState) -> Router {
    let (routes, openapi) = match backend {
        Backend::Users => (users_router(), UsersApiDoc::openapi()),
        Backend::Teams => (teams_router(), TeamsApiDoc::openapi()),
        Backend::Matches => (matches_router(), MatchesApiDoc::openapi()),
    };

    routes
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
