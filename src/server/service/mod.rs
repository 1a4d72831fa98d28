//! Business logic for every backend resource.
//!
//! Services own the rules that span more than one repository call: uniqueness checks,
//! referee availability, dependent rows on delete, and the mapping of store failures
//! to the messages returned to callers.

pub mod club;
pub mod division;
pub mod r#match;
pub mod referee;
pub mod status;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
