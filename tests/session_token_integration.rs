//! End-to-end tests of the session token exchange against a mock HTTP server

mod common;

use besper_bot::{ErrorKind, SessionTokenClient, Settings};
use common::{MockServerFactory, TestUtils, helpers::client_for};
use pretty_assertions::assert_eq;
use wiremock::matchers::method;
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_token_without_environment() {
    TestUtils::init_logger();
    let server = MockServerFactory::new().await;
    MockServerFactory::setup_session(&server, "/sessions/initiate", "bot1", "abc123").await;

    let client = client_for(&server);
    let token = client.get_session_token("bot1", None).await.unwrap();

    assert_eq!(token, "abc123");
}

#[tokio::test]
async fn test_token_with_environment_segment() {
    let server = MockServerFactory::new().await;
    MockServerFactory::setup_session(&server, "/dev/sessions/initiate", "bot1", "dev-token").await;

    let client = client_for(&server);
    for segment in ["dev", "/dev/", "///dev///"] {
        let token = client.get_session_token("bot1", Some(segment)).await.unwrap();
        assert_eq!(token, "dev-token");
    }
}

#[tokio::test]
async fn test_empty_bot_id_sends_nothing() {
    let server = MockServerFactory::new().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_session_token("", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    // Expectations are verified when the server is dropped
}

#[tokio::test]
async fn test_server_error_status() {
    let server = MockServerFactory::new().await;
    MockServerFactory::setup_response(
        &server,
        "/sessions/initiate",
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let err = client_for(&server)
        .get_session_token("bot1", None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Http);
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_not_found_when_environment_unknown() {
    let server = MockServerFactory::new().await;
    MockServerFactory::setup_session(&server, "/dev/sessions/initiate", "bot1", "dev-token").await;

    let err = client_for(&server)
        .get_session_token("bot1", Some("prod"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(
        err.to_string(),
        "Failed to initialize conversation: 404 Not Found"
    );
}

#[tokio::test]
async fn test_unsuccessful_envelope() {
    let server = MockServerFactory::new().await;
    MockServerFactory::setup_response(
        &server,
        "/sessions/initiate",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": false })),
    )
    .await;

    let err = client_for(&server)
        .get_session_token("bot1", None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
}

#[tokio::test]
async fn test_unparsable_body() {
    let server = MockServerFactory::new().await;
    MockServerFactory::setup_response(
        &server,
        "/sessions/initiate",
        ResponseTemplate::new(200).set_body_string("definitely not json"),
    )
    .await;

    let err = client_for(&server)
        .get_session_token("bot1", None)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ResponseParse);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = SessionTokenClient::new(format!("http://{}", addr)).unwrap();
    let err = client.get_session_token("bot1", None).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Transport);
    let message = err.to_string();
    assert!(message.starts_with("Transport error: "));
    assert!(message.to_lowercase().contains("refused"), "{}", message);
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServerFactory::new().await;
    for i in 0..5 {
        MockServerFactory::setup_session(
            &server,
            "/sessions/initiate",
            &format!("bot{}", i),
            &format!("token{}", i),
        )
        .await;
    }
    // Unknown bots get a rejected envelope
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": false })))
        .with_priority(10)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mut handles = Vec::new();
    for i in 0..5 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client.get_session_token(&format!("bot{}", i), None).await
        }));
    }
    let rejected = {
        let client = client.clone();
        tokio::spawn(async move { client.get_session_token("stranger", None).await })
    };

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap().unwrap(), format!("token{}", i));
    }
    assert_eq!(
        rejected.await.unwrap().unwrap_err().kind(),
        ErrorKind::InvalidResponse
    );
}

#[tokio::test]
async fn test_client_from_settings() {
    let server = MockServerFactory::new().await;
    MockServerFactory::setup_session(&server, "/staging/sessions/initiate", "bot9", "s-token")
        .await;

    let mut settings = Settings::default();
    settings.api.base_url = format!("{}/", server.uri());
    settings.network.request_timeout = Some(10);

    let client = SessionTokenClient::from_settings(&settings).unwrap();
    let token = client.get_session_token("bot9", Some("staging")).await.unwrap();

    assert_eq!(token, "s-token");
}
