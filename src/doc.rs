//! OpenAPI document, served at /api/doc.

use crate::handlers;
use crate::model::{NewRestaurant, Picture, Restaurant, RestaurantPatch};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "bistro", description = "Restaurant CRUD API"),
    paths(
        handlers::restaurant::create,
        handlers::restaurant::show,
        handlers::restaurant::edit,
        handlers::restaurant::delete,
    ),
    components(schemas(Restaurant, Picture, NewRestaurant, RestaurantPatch))
)]
pub struct ApiDoc;

async fn api_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn doc_routes() -> Router {
    Router::new().route("/api/doc", get(api_doc))
}
