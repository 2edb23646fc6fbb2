//! Schema bootstrap for the products table
//!
//! No migration framework; the schema is created on startup if absent.

use sqlx::PgPool;

use crate::Result;

/// Create the products table if it does not exist
pub async fn run(pool: &PgPool) -> Result<()> {
    tracing::info!("Running schema bootstrap...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            price DOUBLE PRECISION NOT NULL,
            quantity INTEGER NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema bootstrap complete");
    Ok(())
}
