use form3_core::hash::base64_sha256;

/// Compute the `Digest` header value of a request body: `SHA-256=<base64>`.
///
/// The digest is defined for every body including the empty one. Whether it
/// takes part in the string to sign is decided by the caller.
pub fn content_digest(body: &[u8]) -> String {
    format!("SHA-256={}", base64_sha256(body))
}
