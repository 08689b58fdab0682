//! Picture persistence. Only the fixture loader writes pictures.

use crate::error::AppError;
use crate::model::Picture;
use sqlx::{PgConnection, PgPool};

pub struct PictureService;

impl PictureService {
    /// Insert one picture on an open transaction without committing.
    pub async fn insert(
        conn: &mut PgConnection,
        title: &str,
        slug: &str,
        restaurant_id: i64,
    ) -> Result<Picture, AppError> {
        let row = sqlx::query_as(
            "INSERT INTO picture (title, slug, created_at, restaurant_id) \
             VALUES ($1, $2, NOW(), $3) RETURNING *",
        )
        .bind(title)
        .bind(slug)
        .bind(restaurant_id)
        .fetch_one(conn)
        .await?;
        Ok(row)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, AppError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM picture")
            .fetch_one(pool)
            .await?;
        Ok(n)
    }

    pub async fn count_for_restaurant(pool: &PgPool, restaurant_id: i64) -> Result<i64, AppError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM picture WHERE restaurant_id = $1")
            .bind(restaurant_id)
            .fetch_one(pool)
            .await?;
        Ok(n)
    }
}
