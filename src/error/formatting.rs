//! Error formatting utilities
//!
//! Renders an [`Error`] with its cause chain for terminal output and as
//! structured data for logs.

use crate::Error;
use std::error::Error as StdError;

/// Format error for display, appending any nested causes not already
/// present in the message.
pub fn format_error(error: &Error) -> String {
    let mut result = error.to_string();
    let mut source = error.source();

    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !result.contains(&cause_text) {
            result = format!("{} (caused by {})", result, cause_text);
        }
        source = cause.source();
    }

    result
}

/// Format error for logging with structured data
pub fn format_error_for_logging(error: &Error) -> serde_json::Value {
    let mut log_data = serde_json::json!({
        "message": format_error(error),
        "kind": error.kind().as_str(),
    });

    match error {
        Error::Http {
            status,
            status_text,
        } => {
            log_data["status"] = serde_json::Value::Number((*status).into());
            log_data["status_text"] = serde_json::Value::String(status_text.clone());
        }
        Error::InvalidArgument { field, .. } | Error::Config { field, .. } => {
            log_data["field"] = serde_json::Value::String(field.clone());
        }
        Error::Transport { source, .. } => {
            log_data["timeout"] = serde_json::Value::Bool(source.is_timeout());
            log_data["connect"] = serde_json::Value::Bool(source.is_connect());
        }
        _ => {}
    }

    log_data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_formatting() {
        let error = Error::http(503, "Service Unavailable");
        let formatted = format_error(&error);

        assert!(formatted.contains("503"));
        assert!(formatted.contains("Service Unavailable"));
    }

    #[test]
    fn test_nested_cause_not_duplicated() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let wrapped_error = Error::Io(io_error);

        let formatted = format_error(&wrapped_error);
        assert_eq!(formatted.matches("File not found").count(), 1);
    }

    #[test]
    fn test_invalid_response_formatting() {
        let error = Error::invalid_response("Missing success or token fields.");
        assert_eq!(
            format_error(&error),
            "Invalid response structure: Missing success or token fields."
        );
    }

    #[test]
    fn test_logging_error_formatting() {
        let error = Error::http(404, "Not Found");
        let log_data = format_error_for_logging(&error);

        assert!(log_data["message"].as_str().unwrap().contains("404"));
        assert_eq!(log_data["kind"].as_str().unwrap(), "http");
        assert_eq!(log_data["status"].as_u64().unwrap(), 404);
        assert_eq!(log_data["status_text"].as_str().unwrap(), "Not Found");
    }

    #[test]
    fn test_logging_invalid_argument_field() {
        let error = Error::invalid_argument("bot_id", "is required");
        let log_data = format_error_for_logging(&error);

        assert_eq!(log_data["kind"].as_str().unwrap(), "invalid_argument");
        assert_eq!(log_data["field"].as_str().unwrap(), "bot_id");
    }
}
