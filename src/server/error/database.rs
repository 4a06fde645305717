use thiserror::Error;

/// Failures of the database lifecycle operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database could not be reached, rejected the credentials, or did not
    /// answer within the connect timeout.
    ///
    /// Fatal at startup: the process exits with status 1 without retrying.
    #[error("Failed to connect to the database: {0}")]
    Connect(#[source] sea_orm::DbErr),

    /// Releasing the connection pool failed during shutdown.
    ///
    /// Logged only; the process still exits along its normal path.
    #[error("Failed to disconnect from the database: {0}")]
    Disconnect(#[source] sea_orm::DbErr),
}
