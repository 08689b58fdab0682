//! Restaurant resource routes under /api/restaurant.

use crate::handlers::restaurant::{create, delete as delete_handler, edit, show};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn restaurant_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/restaurant", post(create))
        .route(
            "/api/restaurant/:id",
            get(show).put(edit).delete(delete_handler),
        )
        .with_state(state)
}
