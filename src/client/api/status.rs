use reqwest::Client;
use url::Url;

use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::status::{StatusDto, StatusListDto},
};

pub async fn get_all_status(http: &Client, base: &Url) -> Result<Vec<StatusDto>, ApiError> {
    let response = send_request(get(http, base, "status")?).await?;
    let list: StatusListDto = parse_response(response).await?;
    Ok(list.status)
}
