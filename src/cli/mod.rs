//! Command line interface logic
//!
//! Backs the `besper-token` binary.

pub mod token;

pub use token::{TokenArgs, run_token_mode};
