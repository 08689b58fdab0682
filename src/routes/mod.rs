//! Route tables and the assembled application router.

mod common;
mod restaurant;

pub use common::common_routes;
pub use restaurant::restaurant_routes;

use crate::doc::doc_routes;
use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application router: common routes, the API document, and the
/// restaurant resource.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(doc_routes())
        .merge(restaurant_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
}
