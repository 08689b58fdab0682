//! Shared application state for all routes.

use sqlx::PgPool;
use std::sync::Arc;

/// Builds absolute URLs for API routes. Passed explicitly so handlers never
/// guess at the public origin behind a proxy.
#[derive(Debug)]
pub struct UrlGenerator {
    base: String,
}

impl UrlGenerator {
    pub fn new(public_base_url: &str) -> Self {
        Self {
            base: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL of the show route for one restaurant.
    pub fn restaurant_show(&self, id: i64) -> String {
        format!("{}/api/restaurant/{}", self.base, id)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub urls: Arc<UrlGenerator>,
}

impl AppState {
    pub fn new(pool: PgPool, public_base_url: &str) -> Self {
        Self {
            pool,
            urls: Arc::new(UrlGenerator::new(public_base_url)),
        }
    }
}
