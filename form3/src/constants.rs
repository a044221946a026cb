// Env values used by the client config.
pub const FORM3_ENDPOINT: &str = "FORM3_ENDPOINT";

/// Path of the organisation accounts collection.
pub const ACCOUNTS_PATH: &str = "/v1/organisation/accounts";
