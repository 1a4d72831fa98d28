use reqwest::Client;
use url::Url;

use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::team::{TeamDto, TeamListDto},
};

pub async fn get_team(http: &Client, base: &Url, id: i32) -> Result<TeamDto, ApiError> {
    let response = send_request(get(http, base, &format!("teams/{}", id))?).await?;
    parse_response(response).await
}

pub async fn get_all_teams(http: &Client, base: &Url) -> Result<Vec<TeamDto>, ApiError> {
    let response = send_request(get(http, base, "teams")?).await?;
    let list: TeamListDto = parse_response(response).await?;
    Ok(list.teams)
}
