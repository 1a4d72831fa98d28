//! Domain models and operation parameters.
//!
//! Domain models are converted from entity models by the data layer and into DTOs
//! by the controllers. Parameter models carry the validated request data into the
//! service and data layers.

pub mod club;
pub mod division;
pub mod r#match;
pub mod referee;
pub mod status;
pub mod team;
pub mod user;
