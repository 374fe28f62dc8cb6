//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use besper_bot::SessionTokenClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test data factory
pub struct MockData;

impl MockData {
    /// Expected request body for `bot_id`
    pub fn session_request(bot_id: &str) -> serde_json::Value {
        json!({
            "product": "directline-access",
            "action": "init_conversation",
            "data": { "bot-identifier": bot_id }
        })
    }

    /// Successful envelope carrying `token`
    pub fn session_response(token: &str) -> serde_json::Value {
        json!({ "success": true, "token": token })
    }
}

/// Mock server factory
pub struct MockServerFactory;

impl MockServerFactory {
    /// Create new mock server
    pub async fn new() -> MockServer {
        MockServer::start().await
    }

    /// Answer requests for `bot_id` at `endpoint_path` with `token`
    pub async fn setup_session(
        server: &MockServer,
        endpoint_path: &str,
        bot_id: &str,
        token: &str,
    ) {
        Mock::given(method("POST"))
            .and(path(endpoint_path))
            .and(header("content-type", "application/json"))
            .and(body_json(MockData::session_request(bot_id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(MockData::session_response(token)))
            .mount(server)
            .await;
    }

    /// Answer every POST at `endpoint_path` with `response`
    pub async fn setup_response(
        server: &MockServer,
        endpoint_path: &str,
        response: ResponseTemplate,
    ) {
        Mock::given(method("POST"))
            .and(path(endpoint_path))
            .respond_with(response)
            .mount(server)
            .await;
    }
}

/// Test helper functions
pub mod helpers {
    use super::*;

    /// Client pointed at a mock server
    pub fn client_for(server: &MockServer) -> SessionTokenClient {
        SessionTokenClient::new(server.uri()).unwrap()
    }
}

/// Test utilities
pub struct TestUtils;

impl TestUtils {
    /// Initialize test logging
    pub fn init_logger() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter("debug")
            .try_init();
    }
}
