// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::authorization::{build_authorization, HeaderList};
use crate::canonical::CanonicalRequest;
use crate::constants::{DIGEST, JSON_API_MEDIA_TYPE};
use crate::digest::content_digest;
use crate::key::{FileKeyLoader, LoadKey};
use crate::{Config, SigningRequest};
use form3_core::hash::base64_encode;
use form3_core::time::{format_http_date, now};
use form3_core::{Error, Result};
use http::header::{
    HeaderName, ACCEPT, AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE, HOST,
};
use http::request::Parts;
use http::HeaderValue;
use log::debug;
use std::sync::Arc;

/// RequestSigner produces the authentication headers of Form3 API requests.
///
/// Requests are signed with the draft-cavage HTTP signature scheme: an RSA
/// PKCS#1 v1.5 / SHA-256 signature over the request target, host and date,
/// plus the body headers and digest when the request carries a body.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    config: Config,
    loader: Arc<dyn LoadKey>,
    header_list: HeaderList,
}

impl RequestSigner {
    /// Create a new signer, failing if the config misses a required value.
    ///
    /// The key file is not touched here: it's loaded on every signing call.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            loader: Arc::new(FileKeyLoader),
            header_list: HeaderList::default(),
        })
    }

    /// Replace the key loader, for example with a
    /// [`CachedKeyLoader`](crate::CachedKeyLoader).
    pub fn with_key_loader(mut self, loader: impl LoadKey) -> Self {
        self.loader = Arc::new(loader);
        self
    }

    /// Choose which header names the authorization header advertises.
    pub fn with_header_list(mut self, header_list: HeaderList) -> Self {
        self.header_list = header_list;
        self
    }

    /// Config used by this signer.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Sign the request using `date` as the `Date` header value.
    pub fn sign(&self, req: &SigningRequest<'_>, date: &str) -> Result<SignedHeaders> {
        if date.is_empty() {
            return Err(Error::request_invalid("empty date"));
        }
        req.check()?;

        // The digest is always computed, but only signed for requests with a body.
        let digest = content_digest(req.body.unwrap_or_default());
        let content_length = req.content_length();

        let canonical = CanonicalRequest {
            method: &req.method,
            path: &req.endpoint,
            host: &self.config.host,
            date,
            digest: req.body.map(|_| digest.as_str()),
            content_length,
        };
        let string_to_sign = canonical.string_to_sign();
        debug!("string to sign: {:?}", &string_to_sign);

        let signer = self.loader.load_key(&self.config.key_path)?;
        let signature = base64_encode(&signer.sign(string_to_sign.as_bytes())?);

        let headers = self.header_list.resolve(&canonical.signed_headers());
        let authorization =
            build_authorization(&self.config.key_id, signer.algorithm(), &headers, &signature)?;

        Ok(SignedHeaders {
            host: self.config.host.clone(),
            date: date.to_string(),
            authorization,
            digest: req.body.map(|_| digest),
            content_length: req.body.map(|_| content_length),
        })
    }

    /// Sign the request parts in place, dated now.
    ///
    /// `body` must be the exact bytes that will be sent.
    pub fn sign_parts(&self, parts: &mut Parts, body: Option<&[u8]>) -> Result<()> {
        let req = SigningRequest::build(parts, body)?;
        let date = format_http_date(now());

        self.sign(&req, &date)?.apply(parts)
    }
}

/// The headers produced for one signed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// `Host` header value.
    pub host: String,
    /// `Date` header value.
    pub date: String,
    /// `Authorization` header value.
    pub authorization: String,
    /// `Digest` header value, only for requests with a body.
    pub digest: Option<String>,
    /// `Content-Length` header value, only for requests with a body.
    pub content_length: Option<usize>,
}

impl SignedHeaders {
    /// Apply the signed headers to http::request::Parts.
    ///
    /// Headers are converted first so that a failure leaves the parts untouched.
    pub fn apply(&self, parts: &mut Parts) -> Result<()> {
        let mut headers = vec![
            (HOST, HeaderValue::from_str(&self.host)?),
            (DATE, HeaderValue::from_str(&self.date)?),
            (AUTHORIZATION, HeaderValue::from_str(&self.authorization)?),
        ];
        if let Some(digest) = &self.digest {
            headers.push((ACCEPT, HeaderValue::from_static(JSON_API_MEDIA_TYPE)));
            headers.push((CONTENT_TYPE, HeaderValue::from_static(JSON_API_MEDIA_TYPE)));
            headers.push((
                CONTENT_LENGTH,
                HeaderValue::from(self.content_length.unwrap_or_default()),
            ));
            headers.push((HeaderName::from_static(DIGEST), HeaderValue::from_str(digest)?));
        }

        for (name, value) in headers {
            parts.headers.insert(name, value);
        }
        Ok(())
    }
}
