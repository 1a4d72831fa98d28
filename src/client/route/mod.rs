//! HTML page handlers.

pub mod fixtures;
pub mod home;
pub mod login;
pub mod r#match;
pub mod table;
pub mod team;

#[cfg(test)]
mod test;

use crate::client::error::ClientError;

/// Parses a numeric path segment; anything else is reported as not found.
pub fn parse_path_id(value: &str, not_found: &str) -> Result<i32, ClientError> {
    value
        .parse()
        .map_err(|_| ClientError::NotFound(not_found.to_string()))
}

/// Parses an optional numeric form or query field. Absent and blank are `None`.
pub fn parse_optional_number(value: Option<&str>, field: &str) -> Result<Option<i32>, ClientError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ClientError::BadRequest(format!("{} must be a number.", field))),
    }
}

pub fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}
