//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! resource. Repositories use SeaORM entity models internally and return domain models to
//! keep the data layer separate from business logic. All database queries, inserts,
//! updates, and deletes are performed through these repositories.

pub mod club;
pub mod division;
pub mod r#match;
pub mod referee;
pub mod status;
pub mod team;
pub mod user;

#[cfg(test)]
mod test;
