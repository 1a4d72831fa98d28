//! Resource services of the league: users, teams and matches.
//!
//! One binary runs any of the three backends. Each owns its own store and exposes a
//! JSON CRUD API over its resources; the client service is the only caller that
//! combines them.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, path id parsing and DTO conversion
//! - **Service Layer** (`service/`) - Integrity rules: unique emails, referee double bookings
//! - **Data Layer** (`data/`) - SeaORM queries and entity-to-domain conversion
//! - **Model Layer** (`model/`) - Domain models and write parameters
//! - **Error Layer** (`error/`) - `AppError` and its mapping onto `{status: "fail"}` responses
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based configuration
//! - **State** (`state`) - Shared database pool
//! - **Startup** (`startup`) - Tracing, database connection and migrations, listener
//! - **Router** (`router`) - Route tables and OpenAPI documents per backend
//! - **Seed** (`seed`) - CSV import of the initial data sets

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod seed;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
