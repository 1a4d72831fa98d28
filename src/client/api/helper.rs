use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    client::model::error::ApiError,
    model::api::{DataDto, MessageDto},
};

/// Parses a `{status, data}` envelope and returns its `data`.
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status().as_u16();

    if response.status().is_success() {
        response
            .json::<DataDto<T>>()
            .await
            .map(|envelope| envelope.data)
            .map_err(|e| ApiError {
                status: 500,
                message: format!("Failed to parse response: {}", e),
            })
    } else {
        Err(error_from(status, response).await)
    }
}

/// Parses a message-only success response, such as an update or delete.
pub async fn parse_message_response(response: Response) -> Result<String, ApiError> {
    let status = response.status().as_u16();

    if response.status().is_success() {
        response
            .json::<MessageDto>()
            .await
            .map(|dto| dto.message)
            .map_err(|e| ApiError {
                status: 500,
                message: format!("Failed to parse response: {}", e),
            })
    } else {
        Err(error_from(status, response).await)
    }
}

async fn error_from(status: u16, response: Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<MessageDto>(&body) {
        Ok(dto) => dto.message,
        Err(_) if body.is_empty() => "Unknown error".to_string(),
        Err(_) => body,
    };

    ApiError { status, message }
}

/// Resolves `path` against a service base URL.
pub fn endpoint(base: &Url, path: &str) -> Result<Url, ApiError> {
    base.join(path).map_err(|e| ApiError {
        status: 500,
        message: format!("Invalid service URL {}{}: {}", base, path, e),
    })
}

pub fn get(http: &Client, base: &Url, path: &str) -> Result<RequestBuilder, ApiError> {
    Ok(http.get(endpoint(base, path)?))
}

pub fn put<T: Serialize>(
    http: &Client,
    base: &Url,
    path: &str,
    payload: &T,
) -> Result<RequestBuilder, ApiError> {
    Ok(http.put(endpoint(base, path)?).json(payload))
}

/// Send a request and handle transport errors
pub async fn send_request(request: RequestBuilder) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| ApiError {
        status: 502,
        message: format!("Failed to send request: {}", e),
    })
}
