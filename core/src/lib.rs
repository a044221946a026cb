//! Core components for the signed Form3 client.
//!
//! This crate provides the foundational types shared by the signing and the
//! account crates.
//!
//! ## Overview
//!
//! - **Error**: one error type whose [`ErrorKind`] tells signing failures
//!   (configuration, key loading, key parsing, signing, header assembly) apart
//!   from request and transport failures.
//! - **Context**: a container holding environment access and the HTTP transport,
//!   so that configuration loading and request sending can be replaced in tests.
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//!
//! ## Utilities
//!
//! - [`hash`]: SHA-256 and base64 helpers
//! - [`time`]: HTTP date formatting
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::Context;
pub use context::Env;
pub use context::HttpSend;
pub use context::NoopEnv;
pub use context::NoopHttpSend;
pub use context::OsEnv;
pub use context::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
