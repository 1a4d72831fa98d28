//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let division = factory::create_division(&db).await?;
//!     let referee = factory::create_referee(&db).await?;
//!
//!     let fixture = factory::r#match::MatchFactory::new(&db, division.id)
//!         .referee(Some(referee.id))
//!         .score(3, 2)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod club;
pub mod division;
pub mod helpers;
pub mod r#match;
pub mod referee;
pub mod status;
pub mod team;
pub mod user;

pub use club::create_club;
pub use division::create_division;
pub use r#match::create_match;
pub use referee::create_referee;
pub use status::create_status;
pub use team::create_team;
pub use user::create_user;
