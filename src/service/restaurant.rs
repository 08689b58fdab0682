//! Restaurant persistence: create, find, update, delete.
//!
//! Writes are staged on a transaction and committed explicitly, so callers
//! that batch several inserts (the fixture loader) can share one commit.

use crate::error::AppError;
use crate::model::{NewRestaurant, Restaurant, RestaurantPatch};
use sqlx::{PgConnection, PgPool};

pub struct RestaurantService;

impl RestaurantService {
    /// Insert one restaurant and commit. `created_at` is stamped server-side.
    pub async fn create(pool: &PgPool, new: &NewRestaurant) -> Result<Restaurant, AppError> {
        let mut tx = pool.begin().await?;
        let row = Self::insert(&mut tx, new).await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Insert one restaurant on an open transaction without committing.
    pub async fn insert(
        conn: &mut PgConnection,
        new: &NewRestaurant,
    ) -> Result<Restaurant, AppError> {
        let row = sqlx::query_as(
            "INSERT INTO restaurant (name, description, max_guest, created_at) \
             VALUES ($1, $2, $3, NOW()) RETURNING *",
        )
        .bind(&new.name)
        .bind(&new.description)
        .bind(new.max_guest)
        .fetch_one(conn)
        .await?;
        Ok(row)
    }

    /// Fetch one restaurant by id.
    pub async fn find(pool: &PgPool, id: i64) -> Result<Option<Restaurant>, AppError> {
        let row = sqlx::query_as("SELECT * FROM restaurant WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Apply the supplied fields to one restaurant. Returns the updated row,
    /// or None when no row matches.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        patch: &RestaurantPatch,
    ) -> Result<Option<Restaurant>, AppError> {
        let mut tx = pool.begin().await?;
        let row: Option<Restaurant> = sqlx::query_as(
            "UPDATE restaurant SET \
               name = COALESCE($2, name), \
               description = COALESCE($3, description), \
               max_guest = COALESCE($4, max_guest) \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.max_guest)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Delete one restaurant by id. Returns true when a row was removed.
    /// Dependent pictures go with it (ON DELETE CASCADE).
    pub async fn delete(pool: &PgPool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM restaurant WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(id, removed = result.rows_affected(), "delete restaurant");
        Ok(result.rows_affected() > 0)
    }
}
