//! Configuration management
//!
//! This module handles loading and managing configuration settings for the
//! client and the command line tool.

pub mod loader;
pub mod settings;

pub use loader::ConfigLoader;
pub use settings::{ApiSettings, DEFAULT_BASE_URL, LoggingSettings, NetworkSettings, Settings};

// Serializes tests that touch process environment variables
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
