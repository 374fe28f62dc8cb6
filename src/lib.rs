//! BesperBot - Session Token Client
//!
//! Exchanges a bot identifier for a Direct Line session token by POSTing a
//! small JSON payload to `<base>[/<environment>]/sessions/initiate`.
//!
//! # Features
//!
//! - **Single exchange**: one request per call, no retries, no caching
//! - **Configurable endpoint**: base URL from a constructor argument, a TOML
//!   file or the `API_ENDPOINT` environment variable
//! - **One error type**: every failure is an [`Error`] classified by [`ErrorKind`]
//! - **Pluggable transport**: the HTTP exchange sits behind the [`Transport`] trait
//!
//! # Usage
//!
//! ```bash
//! besper-token --bot-id my-bot --environment dev
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use besper_bot::{DEFAULT_BASE_URL, SessionTokenClient};
//!
//! # async fn example() -> besper_bot::Result<()> {
//! let client = SessionTokenClient::new(DEFAULT_BASE_URL)?;
//! let token = client.get_session_token("my-bot", Some("dev")).await?;
//! println!("{}", token);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod session;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, DEFAULT_BASE_URL, Settings};
pub use error::{Error, ErrorKind, Result};
pub use session::{
    HttpTransport, SessionTokenClient, Transport, TransportResponse, resolve_endpoint,
};
pub use types::{SessionRequest, SessionResponse};
pub use utils::VERSION;
