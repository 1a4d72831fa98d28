//! HTTP calls to the backend services and the weather API.
//!
//! Every function takes the shared `reqwest::Client` and the base URL of the service
//! it talks to, and unwraps the `{status, data}` envelope.

pub mod club;
pub mod division;
pub mod helper;
pub mod r#match;
pub mod referee;
pub mod status;
pub mod team;
pub mod user;
pub mod weather;
