use crate::constants::JSON_API_MEDIA_TYPE;
use http::Method;

/// The fields that make up the string to sign of one request.
///
/// Line order is fixed:
///
/// ```text
/// (request-target): <lowercase-method> <path>
/// host: <host>
/// date: <date>
/// accept: application/vnd.api+json          -- only with a digest
/// content-type: application/vnd.api+json    -- only with a digest
/// content-length: <body length>             -- only with a digest
/// digest: <digest>                          -- only with a digest
/// ```
#[derive(Debug, Clone)]
pub struct CanonicalRequest<'a> {
    /// HTTP method.
    pub method: &'a Method,
    /// Request target: absolute path with its query string.
    pub path: &'a str,
    /// Host header value.
    pub host: &'a str,
    /// Date header value.
    pub date: &'a str,
    /// Digest of the body, `None` or empty for bodyless requests.
    pub digest: Option<&'a str>,
    /// Length of the body in bytes.
    pub content_length: usize,
}

impl CanonicalRequest<'_> {
    fn digest(&self) -> Option<&str> {
        self.digest.filter(|v| !v.is_empty())
    }

    /// Build the exact string the signature is computed over.
    pub fn string_to_sign(&self) -> String {
        let mut s = String::with_capacity(256);

        s.push_str("(request-target): ");
        s.push_str(&self.method.as_str().to_lowercase());
        s.push(' ');
        s.push_str(self.path);
        s.push('\n');

        s.push_str("host: ");
        s.push_str(self.host);
        s.push('\n');

        s.push_str("date: ");
        s.push_str(self.date);
        s.push('\n');

        if let Some(digest) = self.digest() {
            s.push_str("accept: ");
            s.push_str(JSON_API_MEDIA_TYPE);
            s.push('\n');

            s.push_str("content-type: ");
            s.push_str(JSON_API_MEDIA_TYPE);
            s.push('\n');

            s.push_str("content-length: ");
            s.push_str(&self.content_length.to_string());
            s.push('\n');

            s.push_str("digest: ");
            s.push_str(digest);
            s.push('\n');
        }

        s
    }

    /// Names of the lines included in [`CanonicalRequest::string_to_sign`], in order.
    pub fn signed_headers(&self) -> Vec<&'static str> {
        let mut headers = vec!["(request-target)", "host", "date"];
        if self.digest().is_some() {
            headers.extend(["accept", "content-type", "content-length", "digest"]);
        }
        headers
    }
}
