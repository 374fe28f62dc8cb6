//! Endpoint resolution
//!
//! Builds the session initiation URL from a base URL and an optional
//! environment segment.

use crate::Result;

/// Fixed path of the session initiation endpoint
pub const SESSIONS_INITIATE_PATH: &str = "/sessions/initiate";

/// Resolve the session initiation URL
///
/// Leading and trailing `/` are stripped from `environment` before it is
/// spliced between `base_url` and [`SESSIONS_INITIATE_PATH`]. A segment that
/// is empty after stripping is treated as absent.
///
/// ```
/// use besper_bot::resolve_endpoint;
///
/// let base = "https://api.example.com";
/// assert_eq!(resolve_endpoint(base, None), "https://api.example.com/sessions/initiate");
/// assert_eq!(
///     resolve_endpoint(base, Some("/dev/")),
///     "https://api.example.com/dev/sessions/initiate"
/// );
/// ```
pub fn resolve_endpoint(base_url: &str, environment: Option<&str>) -> String {
    match environment.map(|segment| segment.trim_matches('/')) {
        Some(segment) if !segment.is_empty() => {
            format!("{}/{}{}", base_url, segment, SESSIONS_INITIATE_PATH)
        }
        _ => format!("{}{}", base_url, SESSIONS_INITIATE_PATH),
    }
}

/// Validate a base URL and strip its trailing `/` characters
///
/// The base must be an absolute `http` or `https` URL. A full endpoint URL
/// (one already ending in [`SESSIONS_INITIATE_PATH`]) is rejected, since the
/// path would be appended a second time.
pub fn normalize_base_url(base_url: &str) -> Result<String> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(crate::Error::config("base_url", "Base URL cannot be empty"));
    }

    if trimmed.ends_with(SESSIONS_INITIATE_PATH) {
        return Err(crate::Error::config(
            "base_url",
            &format!(
                "'{}' is a full endpoint URL; configure the base URL without '{}' (API_ENDPOINT names the base URL)",
                trimmed, SESSIONS_INITIATE_PATH
            ),
        ));
    }

    let parsed = url::Url::parse(trimmed)?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        scheme => Err(crate::Error::config(
            "base_url",
            &format!("Unsupported URL scheme '{}', expected http or https", scheme),
        )),
    }
}
