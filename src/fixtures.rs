//! Development fixtures: a pool of restaurants, then pictures attached to
//! them. Pictures depend on restaurants, so the picture loader refuses to run
//! against an empty pool.
//!
//! Each loader runs as one transaction with a single commit.

use crate::error::AppError;
use crate::model::{NewRestaurant, Restaurant};
use crate::service::{PictureService, RestaurantService};
use rand::Rng;
use sqlx::PgPool;

/// Restaurants seeded by [`load_restaurants`].
pub const RESTAURANT_POOL: usize = 20;
/// Pictures seeded by [`load_pictures`].
pub const PICTURE_COUNT: usize = 20;
/// Placeholder slug shared by every seeded picture.
pub const PICTURE_SLUG: &str = "slug";

/// Seed the restaurant pool. Not idempotent; run against a fresh database.
pub async fn load_restaurants(pool: &PgPool) -> Result<Vec<Restaurant>, AppError> {
    // Draw the random guest counts up front; ThreadRng must not be held
    // across an await.
    let guest_counts: Vec<i32> = {
        let mut rng = rand::thread_rng();
        (0..RESTAURANT_POOL).map(|_| rng.gen_range(2..=40)).collect()
    };

    let mut tx = pool.begin().await?;
    let mut seeded = Vec::with_capacity(RESTAURANT_POOL);
    for (i, max_guest) in guest_counts.into_iter().enumerate() {
        let new = NewRestaurant {
            name: format!("Restaurant n°{}", i + 1),
            description: "Bienvenue au sein de mon restaurant".into(),
            max_guest,
        };
        seeded.push(RestaurantService::insert(&mut tx, &new).await?);
    }
    tx.commit().await?;
    tracing::info!(count = seeded.len(), "seeded restaurants");
    Ok(seeded)
}

/// Seed [`PICTURE_COUNT`] pictures, each titled sequentially and owned by a
/// restaurant drawn at random from the existing pool. Fails when no
/// restaurants have been seeded yet.
pub async fn load_pictures(pool: &PgPool) -> Result<(), AppError> {
    let restaurant_ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM restaurant ORDER BY id")
        .fetch_all(pool)
        .await?;
    if restaurant_ids.is_empty() {
        return Err(AppError::Fixture(
            "picture fixtures need restaurants; run the restaurant fixtures first".into(),
        ));
    }

    let owners: Vec<i64> = {
        let mut rng = rand::thread_rng();
        (0..PICTURE_COUNT)
            .map(|_| restaurant_ids[rng.gen_range(0..restaurant_ids.len())])
            .collect()
    };

    let mut tx = pool.begin().await?;
    for (i, restaurant_id) in owners.into_iter().enumerate() {
        let title = picture_title(i + 1);
        PictureService::insert(&mut tx, &title, PICTURE_SLUG, restaurant_id).await?;
    }
    tx.commit().await?;
    tracing::info!(count = PICTURE_COUNT, "seeded pictures");
    Ok(())
}

fn picture_title(n: usize) -> String {
    format!("Article n°{}", n)
}
