//! Error handling for the session token client
//!
//! This module defines the error type shared by every operation and helpers to
//! render it for humans and for logs.

pub mod formatting;
pub mod types;

pub use formatting::{format_error, format_error_for_logging};
pub use types::{Error, ErrorKind, Result};
