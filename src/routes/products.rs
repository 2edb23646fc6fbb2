//! Product routes - the CRUD surface over the products table
//!
//! Get takes the id as a path segment; update and delete take it as `?id=`.

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::db::products;
use crate::models::{IdQuery, NewProduct, Product};
use crate::state::AppState;
use crate::{Error, Result};

/// GET /products - List all products, ascending by id
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = products::list(state.pool()).await?;
    Ok(Json(products))
}

/// GET /product/{id} - Fetch one product
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = products::get(state.pool(), id)
        .await?
        .ok_or_else(Error::product_not_found)?;

    Ok(Json(product))
}

/// POST /product - Create a product, returning it with the assigned id
pub async fn create_product(
    State(state): State<AppState>,
    Json(input): Json<NewProduct>,
) -> Result<Json<Product>> {
    let product = products::insert(state.pool(), &input).await?;
    Ok(Json(product))
}

/// PUT /product?id= - Full replace of all four mutable fields
pub async fn update_product(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
    Json(input): Json<NewProduct>,
) -> Result<Json<Product>> {
    let product = products::update(state.pool(), query.id, &input)
        .await?
        .ok_or_else(Error::product_not_found)?;

    Ok(Json(product))
}

/// DELETE /product?id= - Delete a product
pub async fn delete_product(
    State(state): State<AppState>,
    Query(query): Query<IdQuery>,
) -> Result<Json<serde_json::Value>> {
    let deleted = products::delete(state.pool(), query.id).await?;

    if !deleted {
        return Err(Error::product_not_found());
    }

    Ok(Json(serde_json::json!({
        "Message": "Product deleted successfully"
    })))
}
