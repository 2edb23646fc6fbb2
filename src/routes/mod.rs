//! Route handlers
//!
//! Organized by resource type:
//! - products: the product CRUD surface
//! - meta: greeting and health check

pub mod meta;
pub mod products;

pub use meta::*;
pub use products::*;
