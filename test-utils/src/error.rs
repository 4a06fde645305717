use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to open or use the in-memory database.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to allocate a local socket.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
