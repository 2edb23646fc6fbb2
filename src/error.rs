//! Error types for tibra-server
//!
//! One typed error per handled condition, mapped uniformly onto HTTP
//! statuses. Not-found responses use the `{"Message": ...}` body shape the
//! frontend keys on, with a 404 status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid bind address: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    /// The canonical not-found error for the product resource
    pub fn product_not_found() -> Self {
        Error::NotFound("Product not found".to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "Message": msg }))).into_response()
            }
            Error::BadRequest(msg) => {
                let body = json!({ "error": msg, "status": StatusCode::BAD_REQUEST.as_u16() });
                (StatusCode::BAD_REQUEST, Json(body)).into_response()
            }
            other => {
                tracing::error!("request failed: {}", other);
                let body = json!({
                    "error": other.to_string(),
                    "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16()
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
