//! Web server module for handling inbound webhooks.
//!
//! This module provides a thin web server that:
//! - Receives webhook POSTs on the root path
//! - Verifies the HMAC canonical-string signature
//! - Responds with a fixed JSON payload
//!
//! Every accept/reject decision is made in [`crate::signature`]; the
//! handlers only shape requests in and responses out.

pub mod handlers;

pub use handlers::{health, webhook, AppState, HealthResponse, WebhookResponse};
