//! Default handlers for the mounted resource groups.
//!
//! The dashboard, product, user and expense handlers are supplied by the embedding
//! application through [`ResourceRoutes`](crate::server::router::ResourceRoutes).
//! Until a group is supplied, every request to it answers 501 so the mount point
//! stays observable.

use axum::{http::Method, routing::any, Router};

use crate::server::{error::AppError, state::AppState};

/// Router for a resource group with no handlers mounted.
///
/// Matches the group root and every path below it, for any method.
///
/// # Arguments
/// - `resource` - Resource group name reported in the 501 response
pub fn unmounted(resource: &'static str) -> Router<AppState> {
    let handler = move |method: Method| async move {
        tracing::debug!("{} request to unmounted {} resource", method, resource);
        Err::<(), _>(AppError::NotImplemented(resource.to_string()))
    };

    Router::new()
        .route("/", any(handler.clone()))
        .route("/{*path}", any(handler))
}
