//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("unknown service kind: {0}")]
    UnknownService(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Request body could not be decoded.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Validation(String),
    /// Request body larger than the configured limit.
    #[error("{0}")]
    PayloadTooLarge(String),
    /// Carries the entity display name, e.g. "Task".
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Db(#[from] sqlx::Error),
}

/// Boot-time failures. The bootstrap decides per [`SchemaFailurePolicy`](crate::config::SchemaFailurePolicy)
/// whether a schema failure stops the process.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("open store: {0}")]
    Store(#[source] sqlx::Error),
    #[error("schema setup: {0}")]
    Schema(#[source] sqlx::Error),
    #[error("listener: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
