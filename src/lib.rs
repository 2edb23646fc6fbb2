//! tibra-server: HTTP backend for the Tibra product inventory
//!
//! Five CRUD endpoints over a single products table, plus a greeting and a
//! health check. Persistence is PostgreSQL through a process-wide sqlx pool;
//! the schema is bootstrapped at startup.

pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use error::{Error, Result};
pub use state::AppState;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Single origin allowed to make credentialed cross-origin requests
    pub cors_origin: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/tibra".to_string()),
            cors_origin: std::env::var("TIBRA_CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            timeout_secs: 30,
        }
    }
}

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState, allow_origin: HeaderValue, timeout_secs: u64) -> Router {
    // Credentialed CORS cannot use wildcards, so the designated origin is
    // pinned, methods are enumerated, and request headers are mirrored.
    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    let middleware = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(timeout_secs)))
        .layer(cors);

    Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health_check))
        .route("/products", get(routes::list_products))
        .route(
            "/product",
            post(routes::create_product)
                .put(routes::update_product)
                .delete(routes::delete_product),
        )
        .route("/product/{id}", get(routes::get_product))
        .layer(middleware)
        .with_state(state)
}

/// Start the HTTP server
pub async fn serve(config: ServerConfig) -> Result<()> {
    let allow_origin: HeaderValue = config
        .cors_origin
        .parse()
        .map_err(|_| Error::Config(format!("invalid CORS origin '{}'", config.cors_origin)))?;

    let pool = db::pool::create_pool(&config.database_url).await?;
    db::migrations::run(&pool).await?;

    let state = AppState::new(pool);
    let app = build_router(state, allow_origin, config.timeout_secs);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Starting tibra-server on http://{}", addr);

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
