//! HTTP request handlers for the resource services.
//!
//! Handlers parse path ids, convert request DTOs into params, call the matching
//! service and wrap the domain result in the `{status, message, data}` envelope.

pub mod club;
pub mod division;
pub mod r#match;
pub mod ping;
pub mod referee;
pub mod status;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
