//! Strong ETags over serialised response bodies.
//!
//! The ETag is the quoted hex SHA-256 of the exact bytes sent, so it changes
//! whenever any reconciled section changes and never otherwise.

use axum::http::{HeaderMap, header};
use sha2::{Digest, Sha256};

pub fn compute_etag(body: &[u8]) -> String {
  format!("\"{}\"", hex::encode(Sha256::digest(body)))
}

/// Whether the request's `If-None-Match` already names `etag`.
///
/// Accepts `*`, comma-separated lists, weak validators and unquoted values.
pub fn if_none_match(headers: &HeaderMap, etag: &str) -> bool {
  let Some(value) = headers
    .get(header::IF_NONE_MATCH)
    .and_then(|v| v.to_str().ok())
  else {
    return false;
  };

  value
    .split(',')
    .map(str::trim)
    .any(|candidate| candidate == "*" || opaque(candidate) == opaque(etag))
}

fn opaque(tag: &str) -> &str { tag.trim_start_matches("W/").trim_matches('"') }
