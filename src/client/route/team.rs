use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::client::{
    auth::guard::MaybeUser,
    component::{
        layout::{escape, link, page},
        table::table,
    },
    error::ClientError,
    route::{
        fixtures::{fixture_rows, FIXTURE_HEADERS},
        parse_path_id, today,
    },
    service::league::LeagueService,
    state::ClientState,
};

pub const TEAM_NOT_FOUND: &str = "Team does not exist";

/// Club details, the last five results and the upcoming matches of a team.
pub async fn team(
    State(state): State<ClientState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
) -> Result<Html<String>, ClientError> {
    let id = parse_path_id(&id, TEAM_NOT_FOUND)?;

    let team_page = LeagueService::new(&state.http, &state.config)
        .team(id, today())
        .await?;
    let club = &team_page.club;

    let website = club
        .website
        .as_deref()
        .map(|url| format!("<p>{}</p>\n", link(url, url)))
        .unwrap_or_default();
    let form = if team_page.form.is_empty() {
        "-".to_string()
    } else {
        team_page.form.clone()
    };

    let content = format!(
        "<p>{} (stamnumber {}), colors: {}</p>\n\
         <p>{}, {} {}</p>\n\
         {}\
         <h2>Form</h2>\n<p class=\"form\">{}</p>\n\
         <h2>Upcoming matches</h2>\n{}",
        escape(&club.name),
        club.stamnumber,
        escape(&team_page.team.color),
        escape(&club.address),
        club.zipcode,
        escape(&club.city),
        website,
        form,
        table(&FIXTURE_HEADERS, &fixture_rows(&team_page.upcoming)),
    );

    Ok(page(&team_page.name, user.as_ref(), &content))
}
