use super::mock::MockHttpSend;
use crate::{init_logger, test_account, test_config, ACCOUNT_ID, HOST, ORGANISATION_ID};
use anyhow::Result;
use form3::signing::{content_digest, RequestSigner, SigningRequest, JSON_API_MEDIA_TYPE};
use form3::{AccountClient, Context, ErrorKind};
use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE, HOST as HOST_HEADER};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;

fn test_client(http: MockHttpSend) -> AccountClient {
    init_logger();
    AccountClient::new(Context::new().with_http_send(http), test_config())
        .expect("client config must be valid")
}

/// Re-sign the recorded request and compare the authorization headers.
fn assert_signed(req: &http::Request<bytes::Bytes>, body: Option<&[u8]>) {
    let signer = RequestSigner::new(test_config().signing).expect("signing config must be valid");
    let endpoint = req.uri().path_and_query().map(|v| v.as_str()).unwrap_or("/");
    let date = req.headers()[DATE].to_str().expect("date must be valid");

    let expected = signer
        .sign(
            &SigningRequest::new(req.method().clone(), endpoint, body),
            date,
        )
        .expect("sign must succeed");
    assert_eq!(req.headers()[AUTHORIZATION], expected.authorization.as_str());
    assert_eq!(req.headers()[HOST_HEADER], HOST);
}

fn account_response(version: u64) -> String {
    let mut account = test_account(ACCOUNT_ID, ORGANISATION_ID);
    account.data.version = Some(version);
    serde_json::to_string(&account).expect("account must serialize")
}

#[tokio::test]
async fn test_create_account() -> Result<()> {
    let http = MockHttpSend::default().respond(StatusCode::CREATED, account_response(0));
    let client = test_client(http.clone());
    let account = test_account(ACCOUNT_ID, ORGANISATION_ID);

    let created = client.create_account(&account).await?;
    assert_eq!(created.data.id, ACCOUNT_ID);
    assert_eq!(created.data.version, Some(0));

    let requests = http.take_requests();
    assert_eq!(requests.len(), 1);
    let req = &requests[0];
    assert_eq!(req.method(), Method::POST);
    assert_eq!(
        req.uri().to_string(),
        "http://localhost:8080/v1/organisation/accounts"
    );

    let body = serde_json::to_vec(&account)?;
    assert_eq!(req.body().as_ref(), body.as_slice());
    assert_eq!(req.headers()[CONTENT_TYPE], JSON_API_MEDIA_TYPE);
    assert_eq!(req.headers()[CONTENT_LENGTH], body.len().to_string().as_str());
    assert_eq!(req.headers()["digest"], content_digest(&body).as_str());
    assert_signed(req, Some(&body));
    Ok(())
}

#[tokio::test]
async fn test_create_invalid_account_is_not_sent() {
    let http = MockHttpSend::default();
    let client = test_client(http.clone());
    let account = test_account("not-a-uuid", ORGANISATION_ID);

    let err = client.create_account(&account).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.take_requests().is_empty());
}

#[tokio::test]
async fn test_create_duplicate_account() {
    let http = MockHttpSend::default().respond(
        StatusCode::CONFLICT,
        r#"{"error_message":"Account cannot be created as it violates a duplicate constraint"}"#,
    );
    let client = test_client(http);

    let err = client
        .create_account(&test_account(ACCOUNT_ID, ORGANISATION_ID))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ServiceError);
    assert_eq!(
        err.to_string(),
        "unexpected status 409 Conflict: Account cannot be created as it violates a duplicate constraint"
    );
}

#[tokio::test]
async fn test_fetch_account() -> Result<()> {
    let http = MockHttpSend::default().respond(StatusCode::OK, account_response(2));
    let client = test_client(http.clone());

    let account = client.fetch_account(ACCOUNT_ID).await?;
    assert_eq!(account.data.version, Some(2));
    assert_eq!(account.data.attributes.bic, "NWBKGB22");

    let requests = http.take_requests();
    let req = &requests[0];
    assert_eq!(req.method(), Method::GET);
    assert_eq!(
        req.uri().path(),
        "/v1/organisation/accounts/9127e265-9605-4b4b-a0e5-3003ea9cc4dc"
    );
    assert!(req.body().is_empty());
    assert!(!req.headers().contains_key("digest"));
    assert!(!req.headers().contains_key(CONTENT_TYPE));
    assert_signed(req, None);
    Ok(())
}

#[tokio::test]
async fn test_fetch_account_empty_id() {
    let http = MockHttpSend::default();
    let client = test_client(http.clone());

    let err = client.fetch_account("").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.take_requests().is_empty());
}

#[tokio::test]
async fn test_ids_cannot_change_the_request_target() {
    let http = MockHttpSend::default();
    let client = test_client(http.clone());

    for id in [
        "../../v1/organisation/payments",
        "9127e265-9605-4b4b-a0e5-3003ea9cc4dc?version=1",
        "9127e265-9605-4b4b-a0e5-3003ea9cc4dc/x",
    ] {
        let err = client.fetch_account(id).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);

        let err = client.delete_account(id, 0).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }
    assert!(http.take_requests().is_empty());
}

#[tokio::test]
async fn test_fetch_missing_account() {
    let http = MockHttpSend::default().respond(StatusCode::NOT_FOUND, "");
    let client = test_client(http);

    let err = client.fetch_account(ACCOUNT_ID).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ServiceError);
    assert_eq!(err.to_string(), "unexpected status 404 Not Found");
}

#[tokio::test]
async fn test_fetch_malformed_response() {
    let http = MockHttpSend::default().respond(StatusCode::OK, "<html></html>");
    let client = test_client(http);

    let err = client.fetch_account(ACCOUNT_ID).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
}

#[tokio::test]
async fn test_list_accounts() -> Result<()> {
    let first = test_account(ACCOUNT_ID, ORGANISATION_ID);
    let second = test_account("ad27e265-9605-4b4b-a0e5-3003ea9cc4dc", ORGANISATION_ID);
    let body = serde_json::json!({
        "data": [first.data, second.data],
        "links": {"self": "/v1/organisation/accounts?page%5Bnumber%5D=1&page%5Bsize%5D=2"}
    });
    let http = MockHttpSend::default().respond(StatusCode::OK, body.to_string());
    let client = test_client(http.clone());

    let accounts = client.list_accounts(1, 2).await?;
    let ids: Vec<&str> = accounts.iter().map(|v| v.data.id.as_str()).collect();
    assert_eq!(ids, vec![ACCOUNT_ID, "ad27e265-9605-4b4b-a0e5-3003ea9cc4dc"]);

    let requests = http.take_requests();
    let req = &requests[0];
    assert_eq!(req.method(), Method::GET);
    assert_eq!(req.uri().query(), Some("page%5Bnumber%5D=1&page%5Bsize%5D=2"));
    assert_signed(req, None);
    Ok(())
}

#[tokio::test]
async fn test_list_accounts_empty_page() -> Result<()> {
    let http = MockHttpSend::default().respond(StatusCode::OK, r#"{"data":[]}"#);
    let client = test_client(http);

    assert!(client.list_accounts(100, 100).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_delete_account() -> Result<()> {
    let http = MockHttpSend::default().respond(StatusCode::NO_CONTENT, "");
    let client = test_client(http.clone());

    client.delete_account(ACCOUNT_ID, 0).await?;

    let requests = http.take_requests();
    let req = &requests[0];
    assert_eq!(req.method(), Method::DELETE);
    assert_eq!(
        req.uri().path_and_query().map(|v| v.as_str()),
        Some("/v1/organisation/accounts/9127e265-9605-4b4b-a0e5-3003ea9cc4dc?version=0")
    );
    assert_signed(req, None);
    Ok(())
}

#[tokio::test]
async fn test_delete_account_wrong_version() {
    let http = MockHttpSend::default().respond(
        StatusCode::CONFLICT,
        r#"{"error_message":"invalid version"}"#,
    );
    let client = test_client(http);

    let err = client.delete_account(ACCOUNT_ID, 3).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ServiceError);
    assert_eq!(err.to_string(), "unexpected status 409 Conflict: invalid version");
}

#[tokio::test]
async fn test_delete_account_empty_id() {
    let http = MockHttpSend::default();
    let client = test_client(http.clone());

    let err = client.delete_account("", 0).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    assert!(http.take_requests().is_empty());
}

#[tokio::test]
async fn test_transport_errors_are_not_retried() {
    let http = MockHttpSend::default();
    let client = test_client(http.clone());

    let err = client.fetch_account(ACCOUNT_ID).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(http.take_requests().len(), 1);
}

#[tokio::test]
async fn test_signing_errors_stop_the_request() {
    let http = MockHttpSend::default();
    let mut config = test_config();
    config.signing.key_path = "/not/exist/private_key.pem".to_string();
    let client = AccountClient::new(Context::new().with_http_send(http.clone()), config)
        .expect("client config must be valid");

    let err = client.fetch_account(ACCOUNT_ID).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::KeyLoad);
    assert!(err.is_signing_error());
    assert!(http.take_requests().is_empty());
}
