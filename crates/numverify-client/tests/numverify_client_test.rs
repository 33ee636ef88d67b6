//! HTTP-level tests for [`numverify_client::NumverifyClient`] against a mockito server.

use mockito::Matcher;
use numverify_client::{NumverifyClient, NumverifyError};

fn client_for(server: &mockito::ServerGuard) -> NumverifyClient {
    NumverifyClient::new().with_api_url(format!("{}/api/validate", server.url()))
}

/// **Test: access_key and number are sent as query parameters; fields are decoded.**
///
/// **Setup:** Mock GET /api/validate matching both query params.
/// **Action:** `validate("test-key", "+79123456789")`.
/// **Expected:** Mock hit once; response carries country/carrier/line type.
#[tokio::test]
async fn validate_sends_query_and_decodes_answer() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/validate")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("access_key".into(), "test-key".into()),
            Matcher::UrlEncoded("number".into(), "+79123456789".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"valid":true,"country_code":"7","country_name":"Russia","carrier":"MTS","line_type":"mobile"}"#,
        )
        .expect(1)
        .create_async()
        .await;

    let response = client_for(&server)
        .validate("test-key", "+79123456789")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.valid, Some(true));
    assert_eq!(response.country_name.as_deref(), Some("Russia"));
    assert_eq!(response.line_type.as_deref(), Some("mobile"));
}

/// **Test: API error envelope (HTTP 200) becomes NumverifyError::Api.**
#[tokio::test]
async fn validate_maps_api_error_envelope() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/validate")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"success":false,"error":{"code":104,"type":"usage_limit_reached","info":"quota"}}"#,
        )
        .create_async()
        .await;

    let err = client_for(&server).validate("k", "+1").await.unwrap_err();
    assert!(matches!(err, NumverifyError::Api { code: 104, .. }));
}

/// **Test: non-2xx status is reported without decoding the body.**
#[tokio::test]
async fn validate_maps_http_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/api/validate")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let err = client_for(&server).validate("k", "+1").await.unwrap_err();
    assert!(matches!(err, NumverifyError::Status(503)));
}

/// **Test: unreachable endpoint is a transport error.**
#[tokio::test]
async fn validate_unreachable_is_transport_error() {
    let client = NumverifyClient::new().with_api_url("http://127.0.0.1:1/api/validate");
    let err = client.validate("k", "+1").await.unwrap_err();
    assert!(matches!(err, NumverifyError::Transport(_)));
}
