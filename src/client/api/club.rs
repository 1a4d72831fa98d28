use reqwest::Client;
use url::Url;

use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::club::{ClubDto, ClubListDto},
};

pub async fn get_club(http: &Client, base: &Url, stamnumber: i32) -> Result<ClubDto, ApiError> {
    let response = send_request(get(http, base, &format!("clubs/{}", stamnumber))?).await?;
    parse_response(response).await
}

pub async fn get_all_clubs(http: &Client, base: &Url) -> Result<Vec<ClubDto>, ApiError> {
    let response = send_request(get(http, base, "clubs")?).await?;
    let list: ClubListDto = parse_response(response).await?;
    Ok(list.clubs)
}
