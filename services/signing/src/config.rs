use crate::constants::*;
use form3_core::utils::Redact;
use form3_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config holds the values every signed request depends on.
///
/// The signer never reads the process environment by itself: build the
/// config explicitly, or use [`Config::from_env`] with a [`Context`].
#[derive(Clone, Default)]
pub struct Config {
    /// Host of the API, sent and signed as the `host` header.
    pub host: String,
    /// Key identifier the API uses to look up the public key.
    pub key_id: String,
    /// Path to the PEM encoded private key.
    pub key_path: String,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("key_id", &self.key_id)
            .field("key_path", &Redact::from(&self.key_path))
            .finish()
    }
}

impl Config {
    /// Create a config from explicit values.
    pub fn new(
        host: impl Into<String>,
        key_id: impl Into<String>,
        key_path: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            key_id: key_id.into(),
            key_path: key_path.into(),
        }
    }

    /// Load config from environment variables.
    ///
    /// - `FORM3_HOST`
    /// - `FORM3_KEY_ID`
    /// - `FORM3_PRIV_KEY_PATH`, a leading `~` is expanded to the home dir.
    ///
    /// Missing values are left empty and reported by [`Config::validate`].
    pub fn from_env(ctx: &Context) -> Self {
        let key_path = ctx.env_var(FORM3_PRIV_KEY_PATH).unwrap_or_default();
        let key_path = ctx.expand_home_dir(&key_path).unwrap_or(key_path);

        Self {
            host: ctx.env_var(FORM3_HOST).unwrap_or_default(),
            key_id: ctx.env_var(FORM3_KEY_ID).unwrap_or_default(),
            key_path,
        }
    }

    /// Check that every value required for signing is present.
    pub fn validate(&self) -> Result<()> {
        if self.host.is_empty() {
            return Err(Error::config_invalid(format!(
                "empty {FORM3_HOST} env variable"
            )));
        }
        if self.key_id.is_empty() {
            return Err(Error::config_invalid(format!(
                "empty {FORM3_KEY_ID} env variable"
            )));
        }
        if self.key_path.is_empty() {
            return Err(Error::config_invalid(format!(
                "empty {FORM3_PRIV_KEY_PATH} env variable"
            )));
        }
        Ok(())
    }
}
