use crate::constants::FORM3_ENDPOINT;
use form3_core::{Context, Result};
use form3_signing::Config;

/// ClientConfig is the config of an [`AccountClient`](crate::AccountClient).
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Scheme and authority requests are sent to, `http://<host>` if unset.
    pub endpoint: Option<String>,
    /// Signing config.
    pub signing: Config,
}

impl ClientConfig {
    /// Create a client config sending requests to `http://<host>`.
    pub fn new(signing: Config) -> Self {
        Self {
            endpoint: None,
            signing,
        }
    }

    /// Override the endpoint, for example to use `https`.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Load config from environment variables.
    ///
    /// `FORM3_ENDPOINT` is optional, see [`Config::from_env`] for the others.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            endpoint: ctx.env_var(FORM3_ENDPOINT).filter(|v| !v.is_empty()),
            signing: Config::from_env(ctx),
        }
    }

    /// Validate the config and resolve the endpoint, without trailing slash.
    pub fn endpoint(&self) -> Result<String> {
        self.signing.validate()?;

        let endpoint = match &self.endpoint {
            Some(v) => v.trim_end_matches('/').to_string(),
            None => format!("http://{}", self.signing.host),
        };
        Ok(endpoint)
    }
}
