//! Application state shared across all request handlers.
//!
//! The state is built once the database connection is ready and then cloned for
//! each request handler through Axum's state extraction. Handlers may use the
//! database handle but never create or close it; the lifecycle controller owns that.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state around a connected database.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
