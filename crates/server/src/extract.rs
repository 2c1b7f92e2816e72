use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::JsonApiError;

/// Raw JSON request body, validated later by the service layer.
///
/// A request without a JSON content type, or with an empty body, reads as
/// `{}`. Malformed JSON and top-level scalars are rejected as invalid
/// payloads instead of the framework's default rejection.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

fn is_json_content_type(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| ct.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(&req);
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!(err = %e, "failed to read request body");
            JsonApiError::invalid_payload()
        })?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(Value::Object(Map::new())));
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(v @ (Value::Object(_) | Value::Array(_))) => Ok(Self(v)),
            Ok(_) => {
                debug!("top-level JSON scalar rejected");
                Err(JsonApiError::invalid_payload())
            }
            Err(e) => {
                debug!(err = %e, "malformed JSON body");
                Err(JsonApiError::invalid_payload())
            }
        }
    }
}
