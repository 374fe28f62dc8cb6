//! Session token retrieval
//!
//! This module resolves the session endpoint, performs the HTTP exchange and
//! validates the response envelope.

pub mod client;
pub mod endpoint;
pub mod transport;

pub use client::SessionTokenClient;
pub use endpoint::{SESSIONS_INITIATE_PATH, normalize_base_url, resolve_endpoint};
pub use transport::{HttpTransport, Transport, TransportResponse};
