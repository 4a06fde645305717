use sea_orm::{Database, DatabaseConnection};

use crate::error::TestError;

/// Connection string for a private in-memory SQLite database.
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Test context containing the database connection for a single test.
///
/// The database is created lazily on first access and persists for the lifetime of
/// the test context.
pub struct TestContext {
    /// Optional database connection to an in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Creates a new empty test context with no database connection.
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect(IN_MEMORY_DATABASE_URL).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
