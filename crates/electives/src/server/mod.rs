use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::server::endpoints::{catalog, status};
use crate::types::WrapperState;

mod endpoints;
mod types;

/// Creates a router that can be used by `axum`.
///
/// The server only hands out the catalog snapshot and the time grid;
/// filtering happens in whoever consumes them.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<WrapperState>) -> Router {
    let catalog_router = Router::new()
        .route("/courses", get(catalog::get_courses))
        .route(
            "/courses/:departmental/:numeric",
            get(catalog::get_course),
        );

    Router::new()
        .route("/health", get(status::get_health))
        .route("/grid", get(catalog::get_grid))
        .merge(catalog_router)
        .with_state(app_state)
}
