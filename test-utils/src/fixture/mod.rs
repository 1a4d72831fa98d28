//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests of domain logic and serve
//! as default values for factories. Unlike factories, fixtures do NOT insert data
//! into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let fixture = fixture::r#match::entity();
//!
//! let refereed = fixture::r#match::entity_builder()
//!     .id(7)
//!     .referee_id(Some(3))
//!     .build();
//! ```

pub mod r#match;

pub use r#match::{entity as match_entity, entity_builder as match_entity_builder};
