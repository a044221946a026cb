//! Signed client for the Form3 organisation accounts API.
//!
//! ```no_run
//! use form3::{default_context, AccountClient, ClientConfig};
//!
//! # async fn run() -> form3::Result<()> {
//! let ctx = default_context();
//! let client = AccountClient::new(ctx.clone(), ClientConfig::from_env(&ctx))?;
//!
//! for account in client.list_accounts(0, 100).await? {
//!     println!("{}", account.data.id);
//! }
//! # Ok(())
//! # }
//! ```

pub use form3_core::*;

/// Request signing.
pub mod signing {
    pub use form3_signing::*;
}

mod constants;
pub use constants::{ACCOUNTS_PATH, FORM3_ENDPOINT};

mod config;
pub use config::ClientConfig;

mod account;
pub use account::{Account, AccountAttributes, AccountData, ACCOUNT_TYPE};

mod client;
pub use client::AccountClient;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;
