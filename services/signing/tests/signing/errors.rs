use form3_core::ErrorKind;
use form3_signing::{Config, RequestSigner, SigningRequest};
use http::Method;
use std::io::Write;

fn sign_with_key(content: &[u8]) -> form3_core::Result<()> {
    let mut file = tempfile::NamedTempFile::new().expect("create temp key file");
    file.write_all(content).expect("write temp key file");

    let config = Config::new(
        crate::HOST,
        crate::KEY_ID,
        file.path().to_string_lossy().to_string(),
    );
    let signer = RequestSigner::new(config)?;
    let req = SigningRequest::new(Method::GET, "/v1/organisation/accounts", None);
    signer.sign(&req, crate::DATE).map(|_| ())
}

#[test]
fn test_empty_key_id_fails_before_io() {
    let config = Config::new(crate::HOST, "", "/path/to/nowhere/key.pem");
    let err = RequestSigner::new(config).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    assert_eq!(err.to_string(), "empty FORM3_KEY_ID env variable");
}

#[test]
fn test_missing_key_file() {
    let config = Config::new(crate::HOST, crate::KEY_ID, "/path/to/nowhere/key.pem");
    let signer = RequestSigner::new(config).expect("config must be valid");
    let req = SigningRequest::new(Method::GET, "/v1/organisation/accounts", None);

    let err = signer.sign(&req, crate::DATE).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyLoad);
    assert!(err.is_signing_error());
}

#[test]
fn test_unsupported_key_type() {
    let err = sign_with_key(include_bytes!("../../testdata/ed25519_key.pem")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyParse);
    assert!(err.to_string().contains("PRIVATE KEY"));
}

#[test]
fn test_file_without_pem_block() {
    let err = sign_with_key(b"definitely not a key\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyParse);
}
