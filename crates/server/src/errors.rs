use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::ErrorBody;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::debug;

pub const INVALID_PAYLOAD: &str = "Invalid payload";
pub const NOT_FOUND: &str = "Not found";

/// Error response rendered as `{"error": "..."}` with the given status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: String,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self { status, error: error.into() }
    }

    pub fn invalid_payload() -> Self {
        Self::new(StatusCode::BAD_REQUEST, INVALID_PAYLOAD)
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, NOT_FOUND)
    }
}

// The client only ever sees the fixed messages; details stay in the logs.
impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        debug!(err = %e, "request rejected");
        match e {
            ServiceError::InvalidPayload(_) => Self::invalid_payload(),
            ServiceError::NotFound(_) => Self::not_found(),
        }
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.error })).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: std::net::SocketAddr,
        #[source]
        source: std::io::Error,
    },
}
