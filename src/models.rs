//! Wire and row models for the product API
//!
//! `Product` doubles as the storage row and the response shape; the column
//! list and the JSON field list are identical by design. `NewProduct` is the
//! inbound payload: everything except the storage-assigned `id`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

/// Inbound product payload for create and update (no `id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

/// `?id=` query parameter for update and delete
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct IdQuery {
    pub id: i32,
}

/// GET /health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: DatabaseHealth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseHealth {
    pub connected: bool,
}
