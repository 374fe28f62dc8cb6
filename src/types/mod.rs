//! Type definitions for the session token exchange
//!
//! This module contains the request payload and response envelope.

pub mod request;
pub mod response;

pub use request::{ACTION_INIT_CONVERSATION, PRODUCT_DIRECTLINE_ACCESS, SessionRequest};
pub use response::SessionResponse;
