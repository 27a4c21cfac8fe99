//! Webhook endpoint handlers.
//!
//! These handlers only:
//! 1. Normalize the request into (method, path, headers, body)
//! 2. Ask the verifier for a boolean
//! 3. Return the fixed 200/403 JSON response
//!
//! Every rejection produces the same response body, so a sender cannot
//! distinguish a malformed request from a wrong signature.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::signature::{Verifier, SIGNATURE_HEADER};
use crate::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub verifier: Verifier,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let verifier = Verifier::new(config.signing_secret.clone());
        Self {
            config: Arc::new(config),
            verifier,
        }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Webhook
// =============================================================================

/// Webhook response.
///
/// Exactly one of the fields is set, producing either
/// `{"message": "Hello, World!"}` or `{"error": "Invalid signature"}`.
#[derive(Serialize)]
pub struct WebhookResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
}

impl WebhookResponse {
    fn verified() -> Self {
        Self {
            message: Some("Hello, World!"),
            error: None,
        }
    }

    fn invalid() -> Self {
        Self {
            message: None,
            error: Some("Invalid signature"),
        }
    }
}

/// Webhook endpoint.
///
/// This endpoint:
/// 1. Verifies the HMAC canonical-string signature
/// 2. Returns 200 with the fixed payload, or 403 on any failure
pub async fn webhook(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    info!(
        path = %uri.path(),
        body_length = body.len(),
        has_signature = headers.contains_key(SIGNATURE_HEADER),
        "webhook_received"
    );

    let header_map = lowercase_headers(&headers);

    // The signature covers the body text as sent; a body that is not valid
    // UTF-8 cannot match any canonical string.
    let body = match std::str::from_utf8(&body) {
        Ok(b) => b,
        Err(_) => {
            warn!("webhook_body_not_utf8");
            return (StatusCode::FORBIDDEN, Json(WebhookResponse::invalid()));
        }
    };

    if state
        .verifier
        .verify(method.as_str(), uri.path(), &header_map, body)
    {
        info!("webhook_verified");
        (StatusCode::OK, Json(WebhookResponse::verified()))
    } else {
        warn!("webhook_rejected");
        (StatusCode::FORBIDDEN, Json(WebhookResponse::invalid()))
    }
}

/// Flatten an axum header map into lowercase name → value pairs.
///
/// Header-name normalization happens here, once, at the ingestion boundary.
/// Values that are not valid UTF-8 are dropped; the verifier then sees the
/// header as missing.
fn lowercase_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_lowercase(), v.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_webhook_response_verified_serialization() {
        let json = serde_json::to_string(&WebhookResponse::verified()).unwrap();
        assert_eq!(json, r#"{"message":"Hello, World!"}"#);
    }

    #[test]
    fn test_webhook_response_invalid_serialization() {
        let json = serde_json::to_string(&WebhookResponse::invalid()).unwrap();
        assert_eq!(json, r#"{"error":"Invalid signature"}"#);
    }

    #[test]
    fn test_lowercase_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        headers.insert(
            "X-Contentful-Signature",
            HeaderValue::from_static("deadbeef"),
        );

        let map = lowercase_headers(&headers);
        assert_eq!(map.get("content-type").unwrap(), "application/json");
        assert_eq!(map.get("x-contentful-signature").unwrap(), "deadbeef");
    }

    #[test]
    fn test_lowercase_headers_drops_non_utf8_values() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-binary",
            HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap(),
        );
        headers.insert("x-plain", HeaderValue::from_static("ok"));

        let map = lowercase_headers(&headers);
        assert!(!map.contains_key("x-binary"));
        assert_eq!(map.get("x-plain").unwrap(), "ok");
    }
}
