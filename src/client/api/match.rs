use reqwest::Client;
use url::Url;

use crate::{
    client::{
        api::helper::{get, parse_message_response, parse_response, put, send_request},
        model::error::ApiError,
    },
    model::r#match::{MatchDto, MatchListDto, MatchPayloadDto},
};

pub async fn get_match(http: &Client, base: &Url, id: i32) -> Result<MatchDto, ApiError> {
    let response = send_request(get(http, base, &format!("matches/{}", id))?).await?;
    parse_response(response).await
}

pub async fn get_all_matches(http: &Client, base: &Url) -> Result<Vec<MatchDto>, ApiError> {
    let response = send_request(get(http, base, "matches")?).await?;
    let list: MatchListDto = parse_response(response).await?;
    Ok(list.matches)
}

/// Replaces a match and returns the backend's confirmation message.
pub async fn update_match(
    http: &Client,
    base: &Url,
    id: i32,
    payload: &MatchPayloadDto,
) -> Result<String, ApiError> {
    let request = put(http, base, &format!("matches/{}", id), payload)?;
    let response = send_request(request).await?;
    parse_message_response(response).await
}
