//! Version information utilities

/// Library version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the current library version
pub fn get_version() -> &'static str {
    VERSION
}
