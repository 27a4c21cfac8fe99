//! Canonical request serialization.
//!
//! Sender and receiver must agree on the exact byte string covered by the
//! signature. The canonical form is four newline-joined lines:
//!
//! ```text
//! METHOD
//! /path
//! name:value;name:value
//! body
//! ```
//!
//! The header line carries only the headers the sender declared as signed,
//! in the sender's order, joined by semicolons. The method is uppercased
//! and the path excludes the query string; both sides of the protocol rely
//! on those two conventions.

use std::collections::HashMap;

/// Build the canonical string for a request.
///
/// # Arguments
///
/// * `method` - HTTP method; normalized to uppercase here
/// * `path` - Request path, without the query string
/// * `headers` - Header map with lowercase names
/// * `signed_header_names` - Header names covered by the signature, in
///   sender order; each name is trimmed and lowercased before lookup, and
///   names missing from `headers` are skipped
/// * `body` - Raw request body
///
/// # Returns
///
/// The canonical string. Identical inputs always produce byte-identical
/// output.
pub fn build_canonical_string(
    method: &str,
    path: &str,
    headers: &HashMap<String, String>,
    signed_header_names: &[String],
    body: &str,
) -> String {
    let header_segment = signed_header_names
        .iter()
        .filter_map(|name| {
            let name = name.trim().to_lowercase();
            headers.get(&name).map(|value| format!("{}:{}", name, value))
        })
        .collect::<Vec<String>>()
        .join(";");

    format!(
        "{}\n{}\n{}\n{}",
        method.to_uppercase(),
        path,
        header_segment,
        body
    )
}
