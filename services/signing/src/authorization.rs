use crate::constants::LITERAL_HEADER_LIST;
use form3_core::{Error, Result};

/// HeaderList decides which header names the `header` parameter advertises.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderList {
    /// Always advertise `(request-target) host date accept content-type content-length digest`,
    /// even for requests whose string to sign only holds the first three lines.
    ///
    /// This is what the API has been verified against so far.
    #[default]
    Literal,
    /// Advertise exactly the lines that were signed.
    Signed,
}

impl HeaderList {
    /// Resolve the advertised list given the lines actually signed.
    pub fn resolve(&self, signed_headers: &[&str]) -> String {
        match self {
            HeaderList::Literal => LITERAL_HEADER_LIST.to_string(),
            HeaderList::Signed => signed_headers.join(" "),
        }
    }
}

/// Build the `Authorization` header value:
///
/// ```text
/// Signature keyId="<key_id>",algorithm="<algorithm>",header="<headers>",signature="<signature>"
/// ```
///
/// `signature` is the base64 encoded signature and must not be empty.
pub fn build_authorization(
    key_id: &str,
    algorithm: &str,
    headers: &str,
    signature: &str,
) -> Result<String> {
    if signature.is_empty() {
        return Err(Error::auth_header(
            "invalid signature: signature must not be empty",
        ));
    }

    Ok(format!(
        r#"Signature keyId="{key_id}",algorithm="{algorithm}",header="{headers}",signature="{signature}""#
    ))
}
