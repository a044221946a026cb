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

use form3_core::{Error, Result};
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer as _};
use rsa::RsaPrivateKey;
use std::fmt::{Debug, Formatter};

/// Signer is the capability to produce a raw signature over arbitrary bytes.
///
/// Key material stays behind this trait: callers only see the signature and
/// the algorithm name advertised in the authorization header.
pub trait Signer: Debug + Send + Sync + 'static {
    /// Algorithm name, as advertised in the `algorithm` parameter.
    fn algorithm(&self) -> &'static str;

    /// Sign the input and return the raw signature bytes.
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>>;
}

/// RSA signer using PKCS#1 v1.5 padding over a SHA-256 digest.
///
/// PKCS#1 v1.5 is deterministic: the same input and key always give the
/// same signature.
pub struct RsaSigner {
    key: SigningKey<Sha256>,
}

impl RsaSigner {
    /// Create a signer from a parsed RSA private key.
    pub fn new(key: RsaPrivateKey) -> Self {
        Self {
            key: SigningKey::<Sha256>::new(key),
        }
    }
}

impl Debug for RsaSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaSigner")
            .field("algorithm", &self.algorithm())
            .finish_non_exhaustive()
    }
}

impl Signer for RsaSigner {
    fn algorithm(&self) -> &'static str {
        "rsa-sha256"
    }

    fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        let signature = self
            .key
            .try_sign(data)
            .map_err(|e| Error::signature(format!("failed to sign: {e}")))?;
        Ok(signature.to_vec())
    }
}
