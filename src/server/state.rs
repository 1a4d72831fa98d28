//! Application state shared across all backend request handlers.

use sea_orm::DatabaseConnection;

/// Application state containing the shared database pool.
///
/// Built once at startup and cloned for each request via Axum's state
/// extraction; clones share the underlying connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool of the service's own store.
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
