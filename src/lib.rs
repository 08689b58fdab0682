//! bistro: restaurant CRUD API over axum and PostgreSQL.

pub mod config;
pub mod doc;
pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod service;
pub mod state;

pub use config::Config;
pub use error::AppError;
pub use migration::{apply_migrations, ensure_database_exists};
pub use routes::{app_router, common_routes, restaurant_routes};
pub use service::{PictureService, RestaurantService};
pub use state::{AppState, UrlGenerator};
