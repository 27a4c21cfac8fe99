//! Canonical-string construction and HMAC-SHA256 signature verification.
//!
//! This is the security core of the receiver:
//! - [`canonical`] deterministically serializes a request into the exact
//!   byte string both sides sign
//! - [`verify`] computes the HMAC-SHA256 digest over that string and
//!   compares it to the sender's signature in constant time
//!
//! The web layer only shapes requests in and responses out; every
//! accept/reject decision is made here.

pub mod canonical;
pub mod verify;

pub use canonical::build_canonical_string;
pub use verify::{Verifier, SIGNATURE_HEADER, SIGNED_HEADERS_HEADER};
