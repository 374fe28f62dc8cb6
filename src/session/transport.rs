//! HTTP transport for the session exchange
//!
//! The client talks to the network only through the [`Transport`] trait.
//! [`HttpTransport`] is the `reqwest` implementation, configured from
//! [`NetworkSettings`].

use crate::{Result, config::NetworkSettings, types::SessionRequest};
use reqwest::{Client, Proxy, header::CONTENT_TYPE};
use std::time::Duration;

/// Completed HTTP exchange as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase, empty if the status has none
    pub status_text: String,
    /// Raw response body
    pub body: String,
}

impl TransportResponse {
    /// Create a response, deriving the status text from the status code
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let status_text = reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Self {
            status,
            status_text,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one JSON POST and delivers the completed response
///
/// Implementations return `Ok` for any HTTP status; only failures to complete
/// the exchange are errors.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// POST `payload` as JSON to `url`
    async fn post_json(&self, url: &str, payload: &SessionRequest) -> Result<TransportResponse>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    /// HTTP client
    client: Client,
}

impl HttpTransport {
    /// Create a transport with default network settings
    pub fn new() -> Result<Self> {
        Self::from_settings(&NetworkSettings::default())
    }

    /// Create a transport from network settings
    pub fn from_settings(network: &NetworkSettings) -> Result<Self> {
        let mut client_builder = Client::builder()
            .user_agent(network.user_agent.as_str())
            .connect_timeout(Duration::from_secs(network.connect_timeout));

        if let Some(secs) = network.request_timeout {
            client_builder = client_builder.timeout(Duration::from_secs(secs));
        }

        if let Some(proxy_url) = network.proxy_url() {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                crate::Error::config("proxy", &format!("Invalid proxy URL '{}': {}", proxy_url, e))
            })?;
            client_builder = client_builder.proxy(proxy);
        } else {
            // Proxy environment variables are read into NetworkSettings instead
            client_builder = client_builder.no_proxy();
        }

        let client = client_builder.build().map_err(|e| {
            crate::Error::config(
                "client_builder",
                &format!("Failed to create HTTP client: {}", e),
            )
        })?;

        Ok(Self { client })
    }

}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, payload: &SessionRequest) -> Result<TransportResponse> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse::new(status, body))
    }
}
