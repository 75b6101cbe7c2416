//! Identity extractor - derives a stable key for a notice from its URL
//!
//! Two strategies, and callers must not assume either one:
//!
//! - A recognized id query parameter gives `"<param>:<value>"`, which
//!   survives query reordering and extra parameters.
//! - Anything else gives `"hash:<16 hex>"`, a truncated SHA-256 of the whole
//!   URL string, stable for a byte-identical URL.

use sha2::{Digest, Sha256};
use url::Url;

/// Query parameters that carry a notice id, highest priority first
pub const ID_PARAMS: [&str; 4] = ["articleNo", "nttNo", "no", "bbsNo"];

/// Prefix of fingerprint identifiers
pub const HASH_TAG: &str = "hash";

/// Number of hex characters kept from the digest
const HASH_LEN: usize = 16;

/// Derive the identifier for a detail URL
#[must_use]
pub fn identify(url: &str) -> String {
    id_param(url).unwrap_or_else(|| fingerprint(url))
}

/// First recognized, non-empty id parameter as `"<param>:<value>"`
///
/// The value is kept as written (percent-decoded only), so `007` stays `007`.
#[must_use]
pub fn id_param(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    ID_PARAMS.iter().find_map(|&name| {
        parsed
            .query_pairs()
            .find(|(k, v)| k == name && !v.is_empty())
            .map(|(_, v)| format!("{name}:{v}"))
    })
}

/// Content-derived identifier for URLs without a recognized parameter
#[must_use]
pub fn fingerprint(url: &str) -> String {
    let digest = Sha256::digest(url.as_bytes());
    let hex = hex::encode(digest);
    format!("{HASH_TAG}:{}", &hex[..HASH_LEN])
}
