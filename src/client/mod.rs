//! Client service: the HTML front end of the league.
//!
//! It owns no store. Every page is assembled from the users, teams and matches
//! services plus a weather forecast API; standings, fixtures and form strings are
//! recomputed on each request.
//!
//! - **API** (`api/`) - `reqwest` calls to the backend services and the weather API
//! - **League** (`league/`) - Pure standings, fixture, form and season computations
//! - **Service** (`service/`) - Page data assembled from several backend calls
//! - **Auth** (`auth/`) - JWT cookies and the access guard
//! - **Routes** (`route/`) - HTML page handlers
//! - **Components** (`component/`) - Shared HTML fragments

pub mod api;
pub mod auth;
pub mod component;
pub mod config;
pub mod error;
pub mod league;
pub mod model;
pub mod route;
pub mod router;
pub mod service;
pub mod state;
