use axum::Router;

use crate::server::{controller::resource, error::AppError, state::AppState};

/// Handler routers for the four resource groups.
///
/// Each group is nested under its prefix by [`router`]. Groups that are not supplied
/// fall back to [`resource::unmounted`]; supply a group with struct update syntax over
/// `ResourceRoutes::default()`.
pub struct ResourceRoutes {
    pub dashboard: Router<AppState>,
    pub products: Router<AppState>,
    pub users: Router<AppState>,
    pub expenses: Router<AppState>,
}

impl Default for ResourceRoutes {
    fn default() -> Self {
        Self {
            dashboard: resource::unmounted("dashboard"),
            products: resource::unmounted("products"),
            users: resource::unmounted("users"),
            expenses: resource::unmounted("expenses"),
        }
    }
}

pub fn router(routes: ResourceRoutes) -> Router<AppState> {
    Router::new()
        .nest("/dashboard", routes.dashboard)
        .nest("/products", routes.products)
        .nest("/users", routes.users)
        .nest("/expenses", routes.expenses)
        .fallback(|| async { AppError::NotFound("Not found".to_string()) })
}
