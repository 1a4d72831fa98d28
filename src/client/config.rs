use url::Url;

use crate::server::{config::DEFAULT_BIND_ADDRESS, error::config::ConfigError};

pub const DEFAULT_WEATHER_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Configuration of the client service, read from the environment.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// HS256 secret used to sign and verify the login cookies.
    pub jwt_secret: String,
    /// Base URLs of the backend services, each ending in `/`.
    pub users_api: Url,
    pub teams_api: Url,
    pub matches_api: Url,
    /// Daily forecast endpoint.
    pub weather_api: Url,
    pub bind_address: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let weather_api = std::env::var("WEATHER_API_URL")
            .unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string());

        Ok(Self {
            jwt_secret: required("JWT_SECRET")?,
            users_api: service_url("USERS_API_URL", &required("USERS_API_URL")?)?,
            teams_api: service_url("TEAMS_API_URL", &required("TEAMS_API_URL")?)?,
            matches_api: service_url("MATCHES_API_URL", &required("MATCHES_API_URL")?)?,
            weather_api: parse_url("WEATHER_API_URL", &weather_api)?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a backend base URL, appending the trailing `/` that `Url::join` needs to
/// keep any path prefix.
pub fn service_url(name: &str, value: &str) -> Result<Url, ConfigError> {
    if value.ends_with('/') {
        parse_url(name, value)
    } else {
        parse_url(name, &format!("{value}/"))
    }
}
