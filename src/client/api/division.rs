use reqwest::Client;
use url::Url;

use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::division::{DivisionDto, DivisionListDto},
};

pub async fn get_division(http: &Client, base: &Url, id: i32) -> Result<DivisionDto, ApiError> {
    let response = send_request(get(http, base, &format!("divisions/{}", id))?).await?;
    parse_response(response).await
}

pub async fn get_all_divisions(http: &Client, base: &Url) -> Result<Vec<DivisionDto>, ApiError> {
    let response = send_request(get(http, base, "divisions")?).await?;
    let list: DivisionListDto = parse_response(response).await?;
    Ok(list.divisions)
}
