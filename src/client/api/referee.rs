use reqwest::Client;
use url::Url;

use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::referee::{RefereeDto, RefereeListDto},
};

pub async fn get_all_referees(http: &Client, base: &Url) -> Result<Vec<RefereeDto>, ApiError> {
    let response = send_request(get(http, base, "referees")?).await?;
    let list: RefereeListDto = parse_response(response).await?;
    Ok(list.referees)
}
