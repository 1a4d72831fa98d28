use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::client::{
    auth::guard::MaybeUser,
    component::{
        layout::{link, page},
        table::table,
    },
    error::ClientError,
    league::season::Season,
    route::{parse_optional_number, parse_path_id, today},
    service::league::LeagueService,
    state::ClientState,
};

pub const DIVISION_NOT_FOUND: &str = "Division does not exist";

#[derive(Deserialize)]
pub struct TableQuery {
    /// Start year of the season; the current season when absent.
    pub season: Option<String>,
}

pub async fn league_table(
    State(state): State<ClientState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
    Query(query): Query<TableQuery>,
) -> Result<Html<String>, ClientError> {
    let id = parse_path_id(&id, DIVISION_NOT_FOUND)?;
    let season = parse_optional_number(query.season.as_deref(), "season")?
        .map(Season::new)
        .unwrap_or_else(|| Season::current(today()));

    let table_page = LeagueService::new(&state.http, &state.config)
        .table(id, season)
        .await?;

    let rows: Vec<Vec<String>> = table_page
        .rows
        .iter()
        .enumerate()
        .map(|(position, (row, name))| {
            vec![
                (position + 1).to_string(),
                link(&format!("/teams/{}", row.team_id), name),
                row.played.to_string(),
                row.win.to_string(),
                row.tie.to_string(),
                row.loss.to_string(),
                row.goals_for.to_string(),
                row.goals_against.to_string(),
                row.goal_difference().to_string(),
                row.clean_sheets.to_string(),
                row.points.to_string(),
            ]
        })
        .collect();

    let previous = table_page.season.previous();
    let next = table_page.season.next();
    let content = format!(
        "<p>Season {} ({} | {})</p>\n{}",
        table_page.season.label(),
        link(
            &format!("/divisions/{}/table?season={}", id, previous.start_year),
            &previous.label()
        ),
        link(
            &format!("/divisions/{}/table?season={}", id, next.start_year),
            &next.label()
        ),
        table(
            &["#", "Team", "P", "W", "D", "L", "GF", "GA", "GD", "CS", "Pts"],
            &rows
        ),
    );

    Ok(page(
        &table_page.division.divisionname,
        user.as_ref(),
        &content,
    ))
}
