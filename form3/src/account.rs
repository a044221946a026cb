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
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Resource type of every account.
pub const ACCOUNT_TYPE: &str = "accounts";

/// Account is a Form3 organisation account, as sent and received on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account resource.
    pub data: AccountData,
}

/// AccountData is the account resource itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    /// Resource type, always `accounts`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Account id, a UUID v4.
    pub id: String,
    /// Organisation id, a UUID v4.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub organisation_id: String,
    /// Resource version, set by the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    /// Account attributes.
    #[serde(default)]
    pub attributes: AccountAttributes,
}

/// AccountAttributes holds the banking details of an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountAttributes {
    /// ISO 3166-1 alpha-2 country code.
    pub country: String,
    /// ISO 4217 currency code.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub base_currency: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_id_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bic: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub iban: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bank_account_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternative_bank_account_names: Vec<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account_classification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joint_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_matching_opt_out: Option<bool>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub secondary_identification: String,
}

static UUID_V4: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(
        r"^[a-fA-F0-9]{8}-[a-fA-F0-9]{4}-4[a-fA-F0-9]{3}-[89aAbB][a-fA-F0-9]{3}-[a-fA-F0-9]{12}$",
    )
    .expect("Failed to compile uuid regex")
});

static COUNTRY: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Z]{2}$").expect("Failed to compile country regex")
});

static CURRENCY: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Z]{3}$").expect("Failed to compile currency regex")
});

static ACCOUNT_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Z0-9]{0,64}$").expect("Failed to compile account number regex")
});

static BANK_ID: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Z0-9]{0,16}$").expect("Failed to compile bank id regex")
});

static BANK_ID_CODE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Z]{0,16}$").expect("Failed to compile bank id code regex")
});

static BIC: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^([A-Z]{6}[A-Z0-9]{2}|[A-Z]{6}[A-Z0-9]{5})$").expect("Failed to compile bic regex")
});

static IBAN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z0-9]{0,64}$").expect("Failed to compile iban regex")
});

impl Account {
    /// Validate the account before it's sent to the API.
    ///
    /// Empty optional fields are accepted, `type`, `id` and `country` are required.
    pub fn validate(&self) -> Result<()> {
        let data = &self.data;
        let attrs = &data.attributes;

        check("type", data.kind == ACCOUNT_TYPE)?;
        check("id", is_account_id(&data.id))?;
        check(
            "organisation_id",
            optional_match(&UUID_V4, &data.organisation_id),
        )?;

        check("country", COUNTRY.is_match(&attrs.country))?;
        check("base_currency", optional_match(&CURRENCY, &attrs.base_currency))?;
        check("account_number", ACCOUNT_NUMBER.is_match(&attrs.account_number))?;
        check("bank_id", BANK_ID.is_match(&attrs.bank_id))?;
        check("bank_id_code", BANK_ID_CODE.is_match(&attrs.bank_id_code))?;
        check("bic", optional_match(&BIC, &attrs.bic))?;
        check("iban", optional_match(&IBAN, &attrs.iban))?;

        check("title", attrs.title.chars().count() <= 40)?;
        check("first_name", attrs.first_name.chars().count() <= 40)?;
        check(
            "bank_account_name",
            attrs.bank_account_name.chars().count() <= 140,
        )?;
        check(
            "secondary_identification",
            attrs.secondary_identification.chars().count() <= 140,
        )?;

        Ok(())
    }
}

/// Account ids are hyphenated UUID v4 values.
pub(crate) fn is_account_id(id: &str) -> bool {
    UUID_V4.is_match(id)
}

fn optional_match(re: &Regex, value: &str) -> bool {
    value.is_empty() || re.is_match(value)
}

fn check(field: &str, valid: bool) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(Error::request_invalid(format!(
            "invalid account: field validation for {field} failed"
        )))
    }
}
