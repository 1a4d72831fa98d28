//! Wire DTOs shared by the backend services, which produce them, and the client
//! service, which consumes them.

pub mod api;
pub mod club;
pub mod division;
pub mod r#match;
pub mod referee;
pub mod status;
pub mod team;
pub mod user;
