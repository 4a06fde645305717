//! HTTP server bootstrap and process lifecycle.
//!
//! This module wires the axum application to the database through SeaORM and owns
//! the process lifecycle from startup to graceful shutdown. Resource handlers are
//! mounted, not implemented, here.
//!
//! # Lifecycle
//!
//! - **Database** (`database`) - Owns the single database client: connect once, disconnect once
//! - **Lifecycle** (`lifecycle/`) - State machine sequencing connect, listen, drain and disconnect
//!
//! # Application
//!
//! - **Startup** (`startup`) - Assembles routes, middleware and state into one router
//! - **Router** (`router`) - Mounts the dashboard, product, user and expense groups
//! - **Controller** (`controller/`) - Default handlers for groups without an implementation
//! - **Middleware** (`middleware/`) - Body limit, CORS, security headers, access log
//! - **State** (`state`) - Shared application state handed to handlers
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Error** (`error/`) - Application error types and HTTP response mapping
//! - **Logger** (`logger`) - Global tracing subscriber setup
//!
//! # Startup Order
//!
//! 1. `.env` is loaded and logging initialised
//! 2. Configuration is read; an error exits with status 1
//! 3. SIGINT/SIGTERM handlers are installed
//! 4. The controller connects the database; failure exits with status 1
//! 5. The listener binds `0.0.0.0:PORT` and serves until a termination signal
//! 6. In-flight requests drain (bounded by `SHUTDOWN_TIMEOUT_SECS`), then the
//!    database disconnects and the process exits with status 0

pub mod config;
pub mod controller;
pub mod database;
pub mod error;
pub mod lifecycle;
pub mod logger;
pub mod middleware;
pub mod router;
pub mod startup;
pub mod state;
