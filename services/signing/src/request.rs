use form3_core::{Error, Result};
use http::Method;

/// Signing context for one outgoing request.
///
/// `body` is `None` for bodyless requests (GET, DELETE). A request with a
/// body, even an empty one, gets its digest signed.
#[derive(Debug, Clone)]
pub struct SigningRequest<'a> {
    /// HTTP method.
    pub method: Method,
    /// Absolute path with its query string, as sent on the request line.
    pub endpoint: String,
    /// The exact bytes sent as request body.
    pub body: Option<&'a [u8]>,
}

impl<'a> SigningRequest<'a> {
    /// Create a signing request from its parts.
    pub fn new(method: Method, endpoint: impl Into<String>, body: Option<&'a [u8]>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body,
        }
    }

    /// Build a signing request from http::request::Parts.
    ///
    /// The body is passed separately since the parts do not carry it.
    pub fn build(parts: &http::request::Parts, body: Option<&'a [u8]>) -> Result<Self> {
        let endpoint = parts
            .uri
            .path_and_query()
            .map(|v| v.as_str())
            .unwrap_or("/");

        let req = Self::new(parts.method.clone(), endpoint, body);
        req.check()?;
        Ok(req)
    }

    /// Ensure the endpoint can be used as request target.
    pub fn check(&self) -> Result<()> {
        if !self.endpoint.starts_with('/') {
            return Err(Error::request_invalid(format!(
                "endpoint {} is not an absolute path",
                self.endpoint
            )));
        }
        Ok(())
    }

    /// Length of the body in bytes, zero for bodyless requests.
    #[inline]
    pub fn content_length(&self) -> usize {
        self.body.map(|v| v.len()).unwrap_or_default()
    }
}
