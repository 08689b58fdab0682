//! Database rows and request payloads. Wire format is camelCase (`maxGuest`,
//! `createdAt`); columns are snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub max_guest: i32,
    /// Set once at creation, server-side.
    pub created_at: DateTime<Utc>,
}

/// Created by the fixture loader only; there is no picture API route.
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub restaurant_id: i64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewRestaurant {
    pub name: String,
    pub description: String,
    pub max_guest: i32,
}

/// Update payload; only supplied fields are applied.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RestaurantPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub max_guest: Option<i32>,
}
