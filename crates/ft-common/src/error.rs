//! Error types for forecast tally.
//!
//! Errors carry a stable code, a category, and a remediation hint, and can
//! be formatted for humans on stderr:
//! ```text
//! ✗ Feed Unavailable
//!   Reason: failed to fetch 'https://...': connection refused
//!   Fix: Check network connectivity and retry.
//! ```

use thiserror::Error;

/// Result type alias for forecast tally operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Transport or HTTP-level failures reaching the feed.
    Network,
    /// The feed arrived but its body is not the expected document.
    Data,
    /// Writing the report failed.
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Network => write!(f, "network"),
            ErrorCategory::Data => write!(f, "data"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for forecast tally.
#[derive(Error, Debug)]
pub enum Error {
    // Network errors (10-19)
    #[error("failed to fetch '{url}': {reason}")]
    Fetch { url: String, reason: String },

    #[error("unexpected HTTP status {status} from '{url}'")]
    HttpStatus { url: String, status: u16 },

    // Data errors (20-29)
    #[error("malformed feed: {0}")]
    Decode(#[from] serde_json::Error),

    // I/O errors (30-39)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the error code for this error type.
    ///
    /// - 10-19: Network errors
    /// - 20-29: Data errors
    /// - 30-39: I/O errors
    pub fn code(&self) -> u32 {
        match self {
            Error::Fetch { .. } => 10,
            Error::HttpStatus { .. } => 11,
            Error::Decode(_) => 20,
            Error::Io(_) => 30,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Fetch { .. } | Error::HttpStatus { .. } => ErrorCategory::Network,
            Error::Decode(_) => ErrorCategory::Data,
            Error::Io(_) => ErrorCategory::Io,
        }
    }

    /// Returns a human-readable remediation hint.
    pub fn remediation(&self) -> &'static str {
        match self {
            Error::Fetch { .. } => "Check network connectivity and retry.",
            Error::HttpStatus { .. } => {
                "The feed endpoint rejected the request or is down. Retry later."
            }
            Error::Decode(_) => {
                "The feed format changed or the response was truncated. Inspect it with 'curl <url> | jq .'."
            }
            Error::Io(_) => "Check that stdout is writable (e.g. the pipe reader is still open).",
        }
    }

    /// Returns a short headline for human-readable output.
    pub fn headline(&self) -> &'static str {
        match self {
            Error::Fetch { .. } => "Feed Unavailable",
            Error::HttpStatus { .. } => "Feed Request Failed",
            Error::Decode(_) => "Malformed Feed",
            Error::Io(_) => "I/O Error",
        }
    }
}

/// Format an error for human-readable stderr output.
///
/// Output format:
/// ```text
/// ✗ [Headline]
///   Reason: [Error message]
///   Fix: [Remediation hint]
/// ```
pub fn format_error_human(err: &Error, use_color: bool) -> String {
    let (red, cyan, reset) = if use_color {
        ("\x1b[31m", "\x1b[36m", "\x1b[0m")
    } else {
        ("", "", "")
    };

    format!(
        "{red}✗{reset} {headline}\n  Reason: {message}\n  {cyan}Fix:{reset} {remediation}",
        red = red,
        cyan = cyan,
        reset = reset,
        headline = err.headline(),
        message = err,
        remediation = err.remediation()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetch_error() -> Error {
        Error::Fetch {
            url: "https://feed.test/data.json".into(),
            reason: "connection refused".into(),
        }
    }

    fn decode_error() -> Error {
        Error::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err())
    }

    #[test]
    fn test_error_code() {
        assert_eq!(fetch_error().code(), 10);
        assert_eq!(
            Error::HttpStatus {
                url: "u".into(),
                status: 503
            }
            .code(),
            11
        );
        assert_eq!(decode_error().code(), 20);
    }

    #[test]
    fn test_error_category() {
        assert_eq!(fetch_error().category(), ErrorCategory::Network);
        assert_eq!(decode_error().category(), ErrorCategory::Data);
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
        assert_eq!(io.category(), ErrorCategory::Io);
    }

    #[test]
    fn test_error_message() {
        let err = Error::HttpStatus {
            url: "https://feed.test".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "unexpected HTTP status 404 from 'https://feed.test'"
        );
    }

    #[test]
    fn test_format_error_human_plain() {
        let out = format_error_human(&fetch_error(), false);
        assert!(out.starts_with("✗ Feed Unavailable"));
        assert!(out.contains("Reason: failed to fetch 'https://feed.test/data.json': connection refused"));
        assert!(out.contains("Fix: Check network connectivity"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_format_error_human_color() {
        let out = format_error_human(&fetch_error(), true);
        assert!(out.contains("\x1b[31m✗\x1b[0m"));
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Network.to_string(), "network");
        assert_eq!(ErrorCategory::Data.to_string(), "data");
    }
}
