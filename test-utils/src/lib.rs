//! Inventory Server Test Utils
//!
//! Provides shared testing utilities for the inventory server's unit and integration
//! tests. This crate offers a lazily-connected in-memory SQLite database and helpers
//! for producing network endpoints with nothing listening on them.
//!
//! # Overview
//!
//! - **TestContext**: Test environment owning an in-memory database connection
//! - **net**: Closed ports and unreachable connection strings for failure paths
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::context::TestContext;
//!
//! #[tokio::test]
//! async fn serves_requests() -> Result<(), TestError> {
//!     let mut test = TestContext::new();
//!     let db = test.database().await?.clone();
//!
//!     // Build application state from `db`...
//!
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod error;
pub mod net;
