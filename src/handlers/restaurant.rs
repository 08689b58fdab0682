//! Restaurant CRUD handlers: create, show, edit, delete.

use crate::error::AppError;
use crate::model::{NewRestaurant, Restaurant, RestaurantPatch};
use crate::service::{validation, RestaurantService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

/// Path ids are parsed by hand so a non-numeric id gets the JSON error
/// envelope instead of axum's plain-text rejection.
fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid restaurant id '{}'", id_str)))
}

#[utoipa::path(
    post,
    path = "/api/restaurant",
    request_body = NewRestaurant,
    responses(
        (status = 201, description = "Restaurant created; Location points at the show route", body = Restaurant),
        (status = 422, description = "Invalid payload"),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewRestaurant>,
) -> Result<Response, AppError> {
    validation::validate_new(&body)?;
    let restaurant = RestaurantService::create(&state.pool, &body).await?;
    tracing::info!(id = restaurant.id, "restaurant created");
    let location = state.urls.restaurant_show(restaurant.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(restaurant),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/api/restaurant/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 200, description = "Restaurant found", body = Restaurant),
        (status = 404, description = "No restaurant with this id"),
    )
)]
pub async fn show(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    let restaurant = RestaurantService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::restaurant_not_found(id))?;
    Ok((StatusCode::OK, Json(restaurant)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/restaurant/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    request_body = RestaurantPatch,
    responses(
        (status = 302, description = "Updated; redirects to the show route"),
        (status = 404, description = "No restaurant with this id"),
        (status = 422, description = "Invalid payload"),
    )
)]
pub async fn edit(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Option<Json<RestaurantPatch>>,
) -> Result<Response, AppError> {
    let id = parse_id(&id_str)?;
    // A missing body is a valid no-op update; the redirect still confirms the
    // row exists.
    let patch = body.map(|Json(p)| p).unwrap_or_default();
    validation::validate_patch(&patch)?;
    let restaurant = RestaurantService::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::restaurant_not_found(id))?;
    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, state.urls.restaurant_show(restaurant.id))],
    )
        .into_response())
}

#[utoipa::path(
    delete,
    path = "/api/restaurant/{id}",
    params(("id" = i64, Path, description = "Restaurant id")),
    responses(
        (status = 204, description = "Restaurant deleted"),
        (status = 404, description = "No restaurant with this id"),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id_str)?;
    if !RestaurantService::delete(&state.pool, id).await? {
        return Err(AppError::restaurant_not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
