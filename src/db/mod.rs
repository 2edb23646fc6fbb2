//! Database layer
//!
//! - `pool`: connection pool construction
//! - `migrations`: idempotent schema bootstrap
//! - `products`: queries for the products table

pub mod migrations;
pub mod pool;
pub mod products;
