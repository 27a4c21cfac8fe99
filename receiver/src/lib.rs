//! HookGate - webhook receiver with HMAC signature verification.
//!
//! This library provides the shared modules for the `hookgate-web` binary:
//! - `config`: Environment-based configuration
//! - `signature`: Canonical-string construction and HMAC-SHA256 verification
//! - `web`: Axum handlers mapping verification results to HTTP responses
//!
//! ## Architecture
//!
//! ```text
//! POST / → handler → Verifier → Canonicalizer → HMAC compare → 200/403
//! ```

pub mod config;
pub mod signature;
pub mod web;

// Re-export commonly used types
pub use config::{Config, ConfigError};
pub use signature::{build_canonical_string, Verifier};
pub use web::AppState;
