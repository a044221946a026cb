// Env values used by the signing config.
pub const FORM3_HOST: &str = "FORM3_HOST";
pub const FORM3_KEY_ID: &str = "FORM3_KEY_ID";
pub const FORM3_PRIV_KEY_PATH: &str = "FORM3_PRIV_KEY_PATH";

/// Media type sent and signed for every request carrying a body.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// Header names
pub const DIGEST: &str = "digest";

/// PEM label of a PKCS#1 RSA private key.
pub const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";

/// Header list advertised in the authorization header regardless of the request method.
pub const LITERAL_HEADER_LIST: &str =
    "(request-target) host date accept content-type content-length digest";
