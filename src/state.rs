//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// Wraps the process-wide connection pool built once at startup; handlers
/// receive a clone through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { pool }),
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }
}
