use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::client::{
    auth::guard::MaybeUser,
    component::{
        layout::{escape, escape_attribute, link, page},
        table::table,
    },
    error::ClientError,
    league::fixture::{FixtureEntry, FixtureFilter},
    route::{parse_optional_number, parse_path_id, table::DIVISION_NOT_FOUND},
    service::league::LeagueService,
    state::ClientState,
};

#[derive(Deserialize)]
pub struct FixturesQuery {
    pub matchweek: Option<String>,
    pub team: Option<String>,
}

/// Table rows for a fixture list; each score links to the match page.
pub fn fixture_rows(entries: &[FixtureEntry]) -> Vec<Vec<String>> {
    entries
        .iter()
        .map(|entry| {
            let score = if entry.score.is_empty() {
                "vs"
            } else {
                entry.score.as_str()
            };
            vec![
                entry.matchweek.to_string(),
                entry.date.format("%Y-%m-%d").to_string(),
                entry.time.format("%H:%M").to_string(),
                link(&format!("/teams/{}", entry.home_id), &entry.home),
                link(&format!("/matches/{}", entry.id), score),
                link(&format!("/teams/{}", entry.away_id), &entry.away),
                escape(&entry.status).into_owned(),
                escape(&entry.referee).into_owned(),
            ]
        })
        .collect()
}

pub const FIXTURE_HEADERS: [&str; 8] = [
    "Week", "Date", "Time", "Home", "Score", "Away", "Status", "Referee",
];

pub async fn fixtures(
    State(state): State<ClientState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
    Query(query): Query<FixturesQuery>,
) -> Result<Html<String>, ClientError> {
    let id = parse_path_id(&id, DIVISION_NOT_FOUND)?;
    let filter = FixtureFilter {
        matchweek: parse_optional_number(query.matchweek.as_deref(), "matchweek")?,
        team: query.team.filter(|team| !team.is_empty()),
    };

    let fixtures_page = LeagueService::new(&state.http, &state.config)
        .fixtures(id, &filter)
        .await?;

    let form = format!(
        "<form method=\"get\">\n\
         <label>Matchweek <input name=\"matchweek\" value=\"{}\"></label>\n\
         <label>Team <input name=\"team\" value=\"{}\"></label>\n\
         <button type=\"submit\">Filter</button>\n\
         </form>",
        filter.matchweek.map(|week| week.to_string()).unwrap_or_default(),
        escape_attribute(filter.team.as_deref().unwrap_or_default()),
    );
    let content = format!(
        "{}\n{}",
        form,
        table(&FIXTURE_HEADERS, &fixture_rows(&fixtures_page.entries))
    );

    Ok(page(
        &format!("{} fixtures", fixtures_page.division.divisionname),
        user.as_ref(),
        &content,
    ))
}
