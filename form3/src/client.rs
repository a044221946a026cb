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

use crate::account::{is_account_id, Account, AccountData};
use crate::constants::ACCOUNTS_PATH;
use crate::ClientConfig;
use bytes::Bytes;
use form3_core::{Context, Error, Result};
use form3_signing::{LoadKey, RequestSigner};
use http::{Method, StatusCode};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// AccountClient talks to the Form3 organisation accounts API.
///
/// Every request is signed before it's handed to the [`Context`]'s
/// transport. Requests are sent once, failures are never retried.
#[derive(Debug, Clone)]
pub struct AccountClient {
    ctx: Context,
    endpoint: String,
    signer: RequestSigner,
}

/// Body of an unsuccessful API response.
#[derive(Default, Deserialize)]
#[serde(default)]
struct ErrorResponse {
    error_message: String,
}

/// Body of a list response.
#[derive(Deserialize)]
struct AccountList {
    #[serde(default)]
    data: Vec<AccountData>,
}

impl AccountClient {
    /// Create a new client, failing if the config is incomplete.
    pub fn new(ctx: Context, config: ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let signer = RequestSigner::new(config.signing)?;

        Ok(Self {
            ctx,
            endpoint,
            signer,
        })
    }

    /// Replace the key loader used by the request signer.
    pub fn with_key_loader(mut self, loader: impl LoadKey) -> Self {
        self.signer = self.signer.with_key_loader(loader);
        self
    }

    /// Replace the request signer.
    pub fn with_signer(mut self, signer: RequestSigner) -> Self {
        self.signer = signer;
        self
    }

    /// Create an account, returning the account as stored by the API.
    pub async fn create_account(&self, account: &Account) -> Result<Account> {
        account.validate()?;
        let body = serde_json::to_vec(account)?;

        let resp = self
            .send(Method::POST, ACCOUNTS_PATH.to_string(), Some(body.into()))
            .await?;
        expect_status(&resp, StatusCode::CREATED)?;
        decode(&resp)
    }

    /// Fetch the account with `id`.
    pub async fn fetch_account(&self, id: &str) -> Result<Account> {
        check_id(id)?;

        let resp = self
            .send(Method::GET, format!("{ACCOUNTS_PATH}/{id}"), None)
            .await?;
        expect_status(&resp, StatusCode::OK)?;
        decode(&resp)
    }

    /// List one page of accounts.
    pub async fn list_accounts(&self, page_number: usize, page_size: usize) -> Result<Vec<Account>> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("page[number]", &page_number.to_string())
            .append_pair("page[size]", &page_size.to_string())
            .finish();

        let resp = self
            .send(Method::GET, format!("{ACCOUNTS_PATH}?{query}"), None)
            .await?;
        expect_status(&resp, StatusCode::OK)?;
        let list: AccountList = decode(&resp)?;

        Ok(list
            .data
            .into_iter()
            .map(|data| Account { data })
            .collect())
    }

    /// Delete version `version` of the account with `id`.
    pub async fn delete_account(&self, id: &str, version: u64) -> Result<()> {
        check_id(id)?;

        let resp = self
            .send(
                Method::DELETE,
                format!("{ACCOUNTS_PATH}/{id}?version={version}"),
                None,
            )
            .await?;
        expect_status(&resp, StatusCode::NO_CONTENT)
    }

    /// Build, sign and send a request to `path`.
    async fn send(
        &self,
        method: Method,
        path: String,
        body: Option<Bytes>,
    ) -> Result<http::Response<Bytes>> {
        let req = http::Request::builder()
            .method(method)
            .uri(format!("{}{}", self.endpoint, path))
            .body(body.clone().unwrap_or_default())?;
        let (mut parts, bs) = req.into_parts();
        self.signer.sign_parts(&mut parts, body.as_deref())?;

        debug!("sending request: {} {}", parts.method, parts.uri);
        let resp = self
            .ctx
            .http_send(http::Request::from_parts(parts, bs))
            .await?;
        debug!("got response: {}", resp.status());

        Ok(resp)
    }
}

/// Ids become part of the signed request target, only UUID v4 values are accepted.
fn check_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(Error::request_invalid("empty account id"));
    }
    if !is_account_id(id) {
        return Err(Error::request_invalid(format!("invalid account id {id:?}")));
    }
    Ok(())
}

fn expect_status(resp: &http::Response<Bytes>, expected: StatusCode) -> Result<()> {
    let status = resp.status();
    if status == expected {
        return Ok(());
    }

    let message = serde_json::from_slice::<ErrorResponse>(resp.body())
        .map(|v| v.error_message)
        .unwrap_or_default();
    let message = if message.is_empty() {
        format!("unexpected status {status}")
    } else {
        format!("unexpected status {status}: {message}")
    };
    Err(Error::service_error(message))
}

fn decode<T: DeserializeOwned>(resp: &http::Response<Bytes>) -> Result<T> {
    serde_json::from_slice(resp.body())
        .map_err(|e| Error::unexpected("failed to decode response body").with_source(e))
}
