use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;

use crate::client::{
    auth::{
        guard::{CurrentUser, MaybeUser, Permission},
        token::Claims,
    },
    component::layout::{escape, link, page},
    error::ClientError,
    route::{parse_optional_number, parse_path_id, today},
    service::league::{LeagueService, MatchPage},
    state::ClientState,
};

pub const MATCH_NOT_FOUND: &str = "Match does not exist";

#[derive(Deserialize)]
pub struct ScoreForm {
    pub goalshome: String,
    pub goalsaway: String,
}

#[derive(Deserialize)]
pub struct RefereeForm {
    /// Referee id; blank clears the assignment.
    #[serde(default)]
    pub referee: String,
}

fn score_form(id: i32) -> String {
    format!(
        "<h2>Enter score</h2>\n\
         <form method=\"post\" action=\"/matches/{id}/score\">\n\
         <input name=\"goalshome\" type=\"number\" min=\"0\" required> - \
         <input name=\"goalsaway\" type=\"number\" min=\"0\" required>\n\
         <button type=\"submit\">Save</button>\n\
         </form>"
    )
}

fn referee_form(match_page: &MatchPage) -> String {
    let current = match_page.fixture.referee;
    let mut options = String::from("<option value=\"\">(none)</option>");
    for referee in &match_page.referees {
        let selected = if current == Some(referee.id) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            "<option value=\"{}\"{}>{}</option>",
            referee.id,
            selected,
            escape(&referee.full_name())
        ));
    }

    format!(
        "<h2>Assign referee</h2>\n\
         <form method=\"post\" action=\"/matches/{}/referee\">\n\
         <select name=\"referee\">{}</select>\n\
         <button type=\"submit\">Assign</button>\n\
         </form>",
        match_page.fixture.id, options
    )
}

fn render(match_page: &MatchPage, user: Option<&Claims>) -> Html<String> {
    let entry = &match_page.entry;
    let score = if entry.score.is_empty() {
        "vs".to_string()
    } else {
        escape(&entry.score).into_owned()
    };

    let forecast = match &match_page.forecast {
        Some(forecast) => format!(
            "<p class=\"forecast\">{}, {:.1}&deg;C / {:.1}&deg;C, {:.1} mm</p>",
            escape(forecast.description),
            forecast.temperature_min,
            forecast.temperature_max,
            forecast.precipitation
        ),
        None => String::new(),
    };

    let mut content = format!(
        "<p class=\"teams\">{} {} {}</p>\n\
         <p>{}, matchweek {}</p>\n\
         <p>{} at {}</p>\n\
         <p>Status: {}</p>\n\
         <p>Referee: {}</p>\n\
         {}",
        link(&format!("/teams/{}", entry.home_id), &entry.home),
        score,
        link(&format!("/teams/{}", entry.away_id), &entry.away),
        escape(&match_page.division.divisionname),
        entry.matchweek,
        entry.date.format("%Y-%m-%d"),
        entry.time.format("%H:%M"),
        escape(&entry.status),
        escape(&entry.referee),
        forecast,
    );

    if let Some(claims) = user {
        if claims.club.is_some() || claims.admin {
            content.push('\n');
            content.push_str(&score_form(entry.id));
        }
        if claims.admin {
            content.push('\n');
            content.push_str(&referee_form(match_page));
        }
    }

    let title = format!("{} - {}", entry.home, entry.away);
    page(&title, user, &content)
}

/// Match details, with a weather forecast when the match is at most a week away.
pub async fn match_detail(
    State(state): State<ClientState>,
    MaybeUser(user): MaybeUser,
    Path(id): Path<String>,
) -> Result<Html<String>, ClientError> {
    let id = parse_path_id(&id, MATCH_NOT_FOUND)?;

    let match_page = LeagueService::new(&state.http, &state.config)
        .match_detail(id, today())
        .await?;

    Ok(render(&match_page, user.as_ref()))
}

/// Enters the score of a match. Allowed for admins and members of the home club.
pub async fn enter_score(
    State(state): State<ClientState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Form(form): Form<ScoreForm>,
) -> Result<Redirect, ClientError> {
    let id = parse_path_id(&id, MATCH_NOT_FOUND)?;
    let (Some(goals_home), Some(goals_away)) = (
        parse_optional_number(Some(form.goalshome.as_str()), "goalshome")?,
        parse_optional_number(Some(form.goalsaway.as_str()), "goalsaway")?,
    ) else {
        return Err(ClientError::BadRequest("Both scores are required.".to_string()));
    };
    if goals_home < 0 || goals_away < 0 {
        return Err(ClientError::BadRequest("Scores cannot be negative.".to_string()));
    }

    let service = LeagueService::new(&state.http, &state.config);
    user.require(Permission::Club(service.home_club(id).await?))?;

    service.enter_score(id, goals_home, goals_away).await?;

    Ok(Redirect::to(&format!("/matches/{}", id)))
}

/// Assigns or clears the referee of a match. Admins only.
pub async fn assign_referee(
    State(state): State<ClientState>,
    user: CurrentUser,
    Path(id): Path<String>,
    Form(form): Form<RefereeForm>,
) -> Result<Redirect, ClientError> {
    let id = parse_path_id(&id, MATCH_NOT_FOUND)?;
    user.require(Permission::Admin)?;
    let referee = parse_optional_number(Some(form.referee.as_str()), "referee")?;

    LeagueService::new(&state.http, &state.config)
        .assign_referee(id, referee)
        .await?;

    Ok(Redirect::to(&format!("/matches/{}", id)))
}
