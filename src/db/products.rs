//! Queries for the products table
//!
//! Each function issues one statement against the pool. Writes use
//! `RETURNING *` so the response row reflects what storage actually holds,
//! including the assigned id.

use sqlx::PgPool;

use crate::models::{NewProduct, Product};
use crate::Result;

/// Fetch all products ordered by ascending id
pub async fn list(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as("SELECT * FROM products ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(products)
}

/// Fetch one product by id
pub async fn get(pool: &PgPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as("SELECT * FROM products WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(product)
}

/// Insert a new product and return it with the storage-assigned id
pub async fn insert(pool: &PgPool, input: &NewProduct) -> Result<Product> {
    let product = sqlx::query_as(
        r#"
        INSERT INTO products (name, description, price, quantity)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .bind(input.quantity)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Overwrite all four mutable fields of an existing product.
///
/// Full replace, not a partial patch. Returns `None` when no row has the id.
pub async fn update(pool: &PgPool, id: i32, input: &NewProduct) -> Result<Option<Product>> {
    let product = sqlx::query_as(
        r#"
        UPDATE products SET
            name = $2,
            description = $3,
            price = $4,
            quantity = $5
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(&input.name)
    .bind(&input.description)
    .bind(input.price)
    .bind(input.quantity)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Delete a product by id. Returns `false` when no row had the id.
pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{migrations, pool::create_pool};

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("bootstrap failed");
        pool
    }

    fn pen() -> NewProduct {
        NewProduct {
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: 1.5,
            quantity: 100,
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_assigns_positive_unique_ids() {
        let pool = test_pool().await;

        let first = insert(&pool, &pen()).await.unwrap();
        let second = insert(&pool, &pen()).await.unwrap();

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(first.name, "Pen");
        assert_eq!(first.price, 1.5);
        assert_eq!(first.quantity, 100);

        delete(&pool, first.id).await.unwrap();
        delete(&pool, second.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn get_roundtrips_inserted_row() {
        let pool = test_pool().await;

        let created = insert(&pool, &pen()).await.unwrap();
        let fetched = get(&pool, created.id).await.unwrap();

        assert_eq!(fetched, Some(created.clone()));

        delete(&pool, created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_ordered_by_id() {
        let pool = test_pool().await;

        let a = insert(&pool, &pen()).await.unwrap();
        let b = insert(&pool, &pen()).await.unwrap();

        let products = list(&pool).await.unwrap();
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);

        delete(&pool, a.id).await.unwrap();
        delete(&pool, b.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_replaces_every_field() {
        let pool = test_pool().await;

        let created = insert(&pool, &pen()).await.unwrap();

        let replacement = NewProduct {
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: 2.0,
            quantity: 90,
        };
        let updated = update(&pool, created.id, &replacement)
            .await
            .unwrap()
            .expect("row exists");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.price, 2.0);
        assert_eq!(updated.quantity, 90);

        // Identical payload again: idempotent full replace
        let again = update(&pool, created.id, &replacement)
            .await
            .unwrap()
            .expect("row exists");
        assert_eq!(again, updated);

        delete(&pool, created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_id_reports_not_found_and_changes_nothing() {
        let pool = test_pool().await;

        let before = list(&pool).await.unwrap();
        let result = update(&pool, i32::MAX, &pen()).await.unwrap();
        let after = list(&pool).await.unwrap();

        assert!(result.is_none());
        assert_eq!(before, after);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_removes_the_row() {
        let pool = test_pool().await;

        let created = insert(&pool, &pen()).await.unwrap();
        assert!(delete(&pool, created.id).await.unwrap());
        assert_eq!(get(&pool, created.id).await.unwrap(), None);

        // Second delete finds nothing
        assert!(!delete(&pool, created.id).await.unwrap());
    }
}
