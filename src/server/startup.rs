use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::normalize_path::NormalizePath;

use crate::server::{
    middleware,
    router::{self, ResourceRoutes},
    state::AppState,
};

/// Builds the complete HTTP application around a connected database.
///
/// Mounts the resource groups, wraps them in the middleware pipeline, and binds the
/// shared state. Trailing slashes are trimmed before routing so `/products/` reaches
/// the products group the same way `/products` does. Called by the lifecycle controller only after the database has
/// connected, so every handler can rely on the connection.
///
/// # Arguments
/// - `db` - Connected database pool shared by all handlers
/// - `routes` - Handler routers for the resource groups
///
/// # Returns
/// - `Router` - Ready to serve
pub fn app(db: DatabaseConnection, routes: ResourceRoutes) -> Router {
    let app = middleware::apply(router::router(routes)).with_state(AppState::new(db));

    Router::new().fallback_service(NormalizePath::trim_trailing_slash(app))
}
