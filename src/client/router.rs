//! Route table of the client service.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::client::{
    route::{fixtures, home, login, r#match, table, team},
    state::ClientState,
};

pub fn router(state: ClientState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/login", get(login::login_page).post(login::login))
        .route("/logout", get(login::logout))
        .route("/refresh", post(login::refresh))
        .route("/divisions/{id}/table", get(table::league_table))
        .route("/divisions/{id}/fixtures", get(fixtures::fixtures))
        .route("/teams/{id}", get(team::team))
        .route("/matches/{id}", get(r#match::match_detail))
        .route("/matches/{id}/score", post(r#match::enter_score))
        .route("/matches/{id}/referee", post(r#match::assign_referee))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
