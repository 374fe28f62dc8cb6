//! Session token client
//!
//! Exchanges a bot identifier for a session token with a single POST to
//! `<base>[/<environment>]/sessions/initiate`.

use crate::{
    Result,
    config::Settings,
    session::{
        endpoint::{normalize_base_url, resolve_endpoint},
        transport::{HttpTransport, Transport},
    },
    types::{SessionRequest, SessionResponse},
};
use tracing::{debug, error};

/// Client for the session initiation endpoint
///
/// Holds no per-call state; one client can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct SessionTokenClient<T = HttpTransport> {
    /// Normalized base URL, without trailing `/`
    base_url: String,
    /// Transport used for the exchange
    transport: T,
}

impl SessionTokenClient<HttpTransport> {
    /// Create a client for `base_url` with a default HTTP transport
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::with_transport(base_url, HttpTransport::new()?)
    }

    /// Create a client from loaded settings
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transport = HttpTransport::from_settings(&settings.network)?;
        Self::with_transport(&settings.api.base_url, transport)
    }
}

impl<T: Transport> SessionTokenClient<T> {
    /// Create a client with a custom transport
    pub fn with_transport(base_url: impl AsRef<str>, transport: T) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url.as_ref())?,
            transport,
        })
    }

    /// Base URL requests are sent under
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Transport used by this client
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// URL a call with `environment` is sent to
    pub fn endpoint(&self, environment: Option<&str>) -> String {
        resolve_endpoint(&self.base_url, environment)
    }

    /// Retrieve a session token for `bot_id`
    ///
    /// Fails with [`ErrorKind::InvalidArgument`](crate::ErrorKind::InvalidArgument)
    /// before any network activity when `bot_id` is empty. Otherwise exactly
    /// one request is sent; there is no retry and no caching.
    pub async fn get_session_token(
        &self,
        bot_id: &str,
        environment: Option<&str>,
    ) -> Result<String> {
        if bot_id.is_empty() {
            return Err(crate::Error::invalid_argument(
                "bot_id",
                "is required to retrieve a session token",
            ));
        }

        let url = self.endpoint(environment);
        let payload = SessionRequest::init_conversation(bot_id);

        debug!("Requesting session token for bot {} from {}", bot_id, url);

        let response = self.transport.post_json(&url, &payload).await.map_err(|e| {
            error!("Session request to {} failed: {}", url, e);
            e
        })?;

        if !response.is_success() {
            error!(
                "Session endpoint returned error status: {} {}",
                response.status, response.status_text
            );
            return Err(crate::Error::http(response.status, response.status_text));
        }

        let value: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
            error!("Failed to parse session response: {}", e);
            crate::Error::ResponseParse(e)
        })?;

        let token = SessionResponse::from_value(value)
            .and_then(SessionResponse::into_token)
            .map_err(|e| {
                error!("Rejected session response for bot {}: {}", bot_id, e);
                e
            })?;

        debug!("Received session token for bot {}", bot_id);
        Ok(token)
    }
}
