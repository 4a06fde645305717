//! Database lifecycle management.
//!
//! The process owns exactly one database client. [`DatabaseLifecycle`] is the seam the
//! lifecycle controller drives: `connect` once at startup, `disconnect` once at shutdown.
//! [`SeaOrmDatabase`] is the production implementation; tests substitute fakes.

use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::sync::Mutex;

use crate::server::{config::Config, error::database::DatabaseError};

/// Connect/disconnect contract for the process-wide database client.
#[async_trait]
pub trait DatabaseLifecycle: Send + Sync + 'static {
    /// Value handed to request handlers once the connection is ready.
    type Handle: Clone + Send + Sync + 'static;

    /// Establishes the connection and confirms the database is ready.
    ///
    /// # Returns
    /// - `Ok(Handle)` - Connected and answering
    /// - `Err(DatabaseError::Connect)` - Unreachable, unauthorized, or timed out
    async fn connect(&self) -> Result<Self::Handle, DatabaseError>;

    /// Releases the connection.
    ///
    /// Safe to call when `connect` never succeeded or the connection was already
    /// released; both cases are a no-op.
    ///
    /// # Returns
    /// - `Ok(())` - Released, or nothing to release
    /// - `Err(DatabaseError::Disconnect)` - Closing the pool failed
    async fn disconnect(&self) -> Result<(), DatabaseError>;
}

/// SeaORM-backed database client.
///
/// Holds the live connection between `connect` and `disconnect` so that the second
/// call of `disconnect` finds nothing to close.
pub struct SeaOrmDatabase {
    options: ConnectOptions,
    connection: Mutex<Option<DatabaseConnection>>,
}

impl SeaOrmDatabase {
    /// Creates an unconnected client for the given connection string.
    ///
    /// # Arguments
    /// - `url` - Database connection string (`postgres://...`, `sqlite:...`)
    /// - `connect_timeout` - Upper bound for acquiring the first connection
    pub fn new(url: &str, connect_timeout: Duration) -> Self {
        let mut options = ConnectOptions::new(url);
        options
            .connect_timeout(connect_timeout)
            .acquire_timeout(connect_timeout)
            .sqlx_logging(false);

        Self {
            options,
            connection: Mutex::new(None),
        }
    }

    /// Creates an unconnected client from application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.database_url, config.database_connect_timeout)
    }

    /// Whether a connection is currently held.
    #[cfg(test)]
    pub async fn is_connected(&self) -> bool {
        self.connection.lock().await.is_some()
    }
}

#[async_trait]
impl DatabaseLifecycle for SeaOrmDatabase {
    type Handle = DatabaseConnection;

    async fn connect(&self) -> Result<DatabaseConnection, DatabaseError> {
        let mut slot = self.connection.lock().await;
        if let Some(db) = slot.as_ref() {
            return Ok(db.clone());
        }

        let db = Database::connect(self.options.clone())
            .await
            .map_err(DatabaseError::Connect)?;
        db.ping().await.map_err(DatabaseError::Connect)?;

        *slot = Some(db.clone());

        Ok(db)
    }

    async fn disconnect(&self) -> Result<(), DatabaseError> {
        let Some(db) = self.connection.lock().await.take() else {
            tracing::debug!("Database disconnect requested with no open connection");
            return Ok(());
        };

        db.close().await.map_err(DatabaseError::Disconnect)
    }
}

#[cfg(test)]
mod test;
