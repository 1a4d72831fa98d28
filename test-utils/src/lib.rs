//! Test support for the league services.
//!
//! Tests get an in-memory SQLite store holding only the tables of the service under
//! test:
//!
//! ```rust,ignore
//! let test = TestBuilder::new().with_match_tables().build().await?;
//! let db = test.db.as_ref().unwrap();
//!
//! let division = factory::division::create_division(db).await?;
//! ```
//!
//! `factory` inserts rows with usable defaults; `fixture` only builds entity models.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
