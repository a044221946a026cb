//! Form3 API request signer
//!
//! Turns a pending request into the `Date`, `Digest` and `Authorization`
//! headers the Form3 API requires. Nothing here performs network I/O: the
//! caller owns the HTTP exchange and attaches the produced headers.
//!
//! ```no_run
//! use form3_signing::{Config, RequestSigner, SigningRequest};
//! use http::Method;
//!
//! # fn main() -> form3_core::Result<()> {
//! let config = Config::new("api.form3.tech", "my-key-id", "/etc/form3/private_key.pem");
//! let signer = RequestSigner::new(config)?;
//!
//! let body = br#"{"data":{"type":"accounts"}}"#;
//! let req = SigningRequest::new(Method::POST, "/v1/organisation/accounts", Some(body));
//! let headers = signer.sign(&req, "Wed, 08 Jan 2020 08:52:44 GMT")?;
//! println!("{}", headers.authorization);
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::{FORM3_HOST, FORM3_KEY_ID, FORM3_PRIV_KEY_PATH, JSON_API_MEDIA_TYPE};

mod config;
pub use config::Config;

mod digest;
pub use digest::content_digest;

mod canonical;
pub use canonical::CanonicalRequest;

mod signer;
pub use signer::{RsaSigner, Signer};

mod key;
pub use key::{load_private_key, parse_private_key, CachedKeyLoader, FileKeyLoader, LoadKey};

mod authorization;
pub use authorization::{build_authorization, HeaderList};

mod request;
pub use request::SigningRequest;

mod sign_request;
pub use sign_request::{RequestSigner, SignedHeaders};
