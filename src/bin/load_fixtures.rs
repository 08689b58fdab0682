//! Seeds development data: the restaurant pool first, then the pictures that
//! reference it.

use bistro::{apply_migrations, ensure_database_exists, fixtures, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bistro=info")),
        )
        .init();

    let config = Config::from_env();
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    apply_migrations(&pool).await?;

    fixtures::load_restaurants(&pool).await?;
    fixtures::load_pictures(&pool).await?;
    tracing::info!("fixtures loaded");
    Ok(())
}
