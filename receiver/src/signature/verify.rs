//! Webhook signature verification.
//!
//! Requests are signed with HMAC-SHA256 over a canonical serialization of
//! method, path, selected headers, and body. The sender declares which
//! headers it signed (and in which order) in `x-contentful-signed-headers`
//! and supplies the lowercase hex digest in `x-contentful-signature`.

use std::collections::HashMap;

use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

use super::canonical::build_canonical_string;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the hex HMAC-SHA256 digest of the canonical string.
pub const SIGNATURE_HEADER: &str = "x-contentful-signature";

/// Header declaring the signed header names, comma-separated, in order.
pub const SIGNED_HEADERS_HEADER: &str = "x-contentful-signed-headers";

/// Why a request was rejected. Used for operator logging only; callers see
/// nothing but the boolean, so responses cannot leak the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RejectReason {
    MissingSignature,
    InvalidKey,
    Mismatch,
}

impl RejectReason {
    fn as_str(self) -> &'static str {
        match self {
            RejectReason::MissingSignature => "missing_signature_header",
            RejectReason::InvalidKey => "invalid_signing_key",
            RejectReason::Mismatch => "digest_mismatch",
        }
    }
}

/// Verifies webhook signatures against a shared secret.
///
/// The secret is injected at construction, so each verification is a pure
/// function of the request. One instance is cheaply cloned into every
/// request handler; there is no mutable state.
#[derive(Clone)]
pub struct Verifier {
    secret: String,
}

impl Verifier {
    /// Create a verifier holding the shared signing secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Verify a request signature.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method of the request
    /// * `path` - Request path, without the query string
    /// * `headers` - Header map with lowercase names, including the
    ///   signature headers themselves
    /// * `body` - Raw request body
    ///
    /// # Returns
    ///
    /// `true` only when the full-length hex digest matches exactly.
    /// Missing headers, a wrong signature, and internal faults all return
    /// `false`; the distinction is logged but never reaches the caller.
    pub fn verify(
        &self,
        method: &str,
        path: &str,
        headers: &HashMap<String, String>,
        body: &str,
    ) -> bool {
        match self.check(method, path, headers, body) {
            Ok(()) => true,
            Err(reason) => {
                warn!(reason = reason.as_str(), "signature_rejected");
                false
            }
        }
    }

    fn check(
        &self,
        method: &str,
        path: &str,
        headers: &HashMap<String, String>,
        body: &str,
    ) -> Result<(), RejectReason> {
        let signature = headers
            .get(SIGNATURE_HEADER)
            .ok_or(RejectReason::MissingSignature)?;

        // An absent signed-headers declaration is not an error: the
        // canonical string simply carries an empty header segment, and the
        // digest only matches if the sender signed it the same way.
        let signed_header_names = headers
            .get(SIGNED_HEADERS_HEADER)
            .map(|raw| raw.split(',').map(|s| s.to_string()).collect::<Vec<String>>())
            .unwrap_or_default();

        let canonical =
            build_canonical_string(method, path, headers, &signed_header_names, body);

        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes())
            .map_err(|_| RejectReason::InvalidKey)?;
        mac.update(canonical.as_bytes());
        let computed = hex::encode(mac.finalize().into_bytes());

        if constant_time_compare(&computed, signature) {
            Ok(())
        } else {
            Err(RejectReason::Mismatch)
        }
    }
}

/// Constant-time string comparison to prevent timing attacks.
///
/// The length check short-circuits, which is fine: the digest length is
/// public. The byte loop must not.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }
    result == 0
}
