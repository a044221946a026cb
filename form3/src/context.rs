use form3_core::{Context, OsEnv};
use form3_http_send_reqwest::ReqwestHttpSend;

/// Build a Context that sends requests with a default reqwest client and
/// reads the process environment.
pub fn default_context() -> Context {
    Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv)
}
