use std::sync::Arc;

use crate::client::config::ClientConfig;

/// Shared state of the client service: one HTTP client for every outgoing call and the
/// service configuration.
#[derive(Clone)]
pub struct ClientState {
    pub http: reqwest::Client,
    pub config: Arc<ClientConfig>,
}

/// HTTP client used for the backend and weather calls.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::Client::new()
}

impl ClientState {
    pub fn new(http: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }
}
