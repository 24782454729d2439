//! HTTP cache control module
//!
//! `ETag` generation and `If-None-Match` evaluation for conditional
//! requests on the static tree.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a content-hash `ETag` for a file body.
///
/// Returns the quoted form, e.g. `"a1b2c3"`.
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check whether the client's `If-None-Match` header matches our `ETag`.
///
/// Handles a single tag, a comma-separated list, and the `*` wildcard.
/// A match means the client's copy is current and 304 applies.
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}
