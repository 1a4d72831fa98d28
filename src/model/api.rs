use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome flag carried by every response envelope.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Fail,
}

/// Envelope for responses that only carry a message: pings, updates, deletes
/// and every error.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct MessageDto {
    pub status: ApiStatus,
    pub message: String,
}

impl MessageDto {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Success,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Fail,
            message: message.into(),
        }
    }
}

/// Envelope for responses carrying a resource or a resource list.
///
/// `message` is only present on creation.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DataDto<T> {
    pub status: ApiStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: ApiStatus::Success,
            message: None,
            data,
        }
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ApiStatus::Success,
            message: Some(message.into()),
            data,
        }
    }
}
