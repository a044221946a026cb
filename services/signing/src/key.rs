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

use crate::constants::RSA_PRIVATE_KEY_LABEL;
use crate::signer::{RsaSigner, Signer};
use form3_core::{Error, Result};
use log::debug;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::Document;
use rsa::RsaPrivateKey;
use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

/// Parse a PEM encoded private key into a [`Signer`].
///
/// Only the first PEM block is decoded, anything after it is ignored.
/// Only PKCS#1 RSA keys (`RSA PRIVATE KEY`) are supported.
pub fn parse_private_key(content: &[u8]) -> Result<Arc<dyn Signer>> {
    let content = std::str::from_utf8(content)
        .map_err(|e| Error::key_parse("no PEM encoded key found").with_source(e))?;
    let (label, doc) = Document::from_pem(first_pem_block(content))
        .map_err(|e| Error::key_parse("no PEM encoded key found").with_source(e))?;

    match label {
        RSA_PRIVATE_KEY_LABEL => {
            let key = RsaPrivateKey::from_pkcs1_der(doc.as_bytes()).map_err(|e| {
                Error::key_parse("invalid PKCS#1 RSA private key").with_source(e)
            })?;
            Ok(Arc::new(RsaSigner::new(key)))
        }
        v => Err(Error::key_parse(format!("unsupported key type {v:?}"))),
    }
}

/// Slice `content` down to its first `-----BEGIN` .. `-----END` block.
fn first_pem_block(content: &str) -> &str {
    let content = &content[content.find("-----BEGIN ").unwrap_or(0)..];
    let Some(end) = content.find("-----END ") else {
        return content;
    };

    let tail = &content[end..];
    let len = tail.find('\n').map(|i| i + 1).unwrap_or(tail.len());
    &content[..end + len]
}

/// Read and parse the private key stored at `path`.
///
/// The file handle is released before parsing starts.
pub fn load_private_key(path: &str) -> Result<Arc<dyn Signer>> {
    let content = fs::read(path).map_err(|e| {
        Error::key_load(format!("failed to read private key file {path}")).with_source(e)
    })?;
    parse_private_key(&content)
}

/// LoadKey turns a key path into key material ready for signing.
pub trait LoadKey: Debug + Send + Sync + 'static {
    /// Load the key stored at `path`.
    fn load_key(&self, path: &str) -> Result<Arc<dyn Signer>>;
}

/// FileKeyLoader reads and parses the key file on every call.
///
/// A key rotated on disk is picked up by the very next request.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileKeyLoader;

impl LoadKey for FileKeyLoader {
    fn load_key(&self, path: &str) -> Result<Arc<dyn Signer>> {
        load_private_key(path)
    }
}

/// CachedKeyLoader keeps parsed keys keyed by path and modification time.
///
/// The file's metadata is checked on every call and the key is parsed again
/// as soon as the modification time changes.
#[derive(Debug, Default)]
pub struct CachedKeyLoader {
    keys: Mutex<HashMap<String, CachedKey>>,
}

#[derive(Debug, Clone)]
struct CachedKey {
    modified: SystemTime,
    signer: Arc<dyn Signer>,
}

impl CachedKeyLoader {
    /// Create a new loader with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoadKey for CachedKeyLoader {
    fn load_key(&self, path: &str) -> Result<Arc<dyn Signer>> {
        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .map_err(|e| {
                Error::key_load(format!("failed to read private key file {path}")).with_source(e)
            })?;

        if let Some(cached) = self.keys.lock().expect("lock poisoned").get(path) {
            if cached.modified == modified {
                debug!("private key for {path} loaded from cache");
                return Ok(cached.signer.clone());
            }
        }

        debug!("private key for {path} changed on disk, reloading");
        let signer = load_private_key(path)?;
        self.keys.lock().expect("lock poisoned").insert(
            path.to_string(),
            CachedKey {
                modified,
                signer: signer.clone(),
            },
        );
        Ok(signer)
    }
}
