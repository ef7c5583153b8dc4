//! Common error type for screenscore.
//!
//! Scrape failures never show up here: they degrade to absent fields inside
//! the extractors. What remains are the failures that abort a whole search or
//! detail request, each carrying enough context for the web layer to pick an
//! HTTP status and a user-facing message.

/// Error type covering every failure that aborts a request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The caller supplied unusable input (e.g. an empty search term).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The metadata API answered with a non-success status.
    #[error("HTTP error occurred: {status} {reason}")]
    Upstream {
        /// Status code returned by the upstream API.
        status: u16,
        /// Canonical reason phrase for `status`, empty if unknown.
        reason: String,
    },

    /// The metadata API could not be reached (connect failure, timeout).
    #[error("Request failed: {0}")]
    Request(String),

    /// The metadata API returned a body that could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new InvalidInput error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new Upstream error.
    pub fn upstream<S: Into<String>>(status: u16, reason: S) -> Self {
        Self::Upstream {
            status,
            reason: reason.into(),
        }
    }

    /// Create a new Internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::Internal(msg.into())
    }

    /// Map this error to an HTTP status code for the inbound response.
    pub fn http_status(&self) -> u16 {
        match self {
            Error::InvalidInput(_) => 400,
            Error::Upstream { .. } => 502,
            Error::Request(_) => 502,
            Error::Decode(_) => 500,
            Error::Internal(_) => 500,
        }
    }

    /// Stable machine-readable code for API error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "invalid_input",
            Error::Upstream { .. } => "upstream_error",
            Error::Request(_) => "request_error",
            Error::Decode(_) => "decode_error",
            Error::Internal(_) => "internal_error",
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_input("Please enter a search term.");
        assert_eq!(err.to_string(), "Invalid input: Please enter a search term.");

        let err = Error::upstream(401, "Unauthorized");
        assert_eq!(err.to_string(), "HTTP error occurred: 401 Unauthorized");

        let err = Error::internal("unexpected state");
        assert_eq!(err.to_string(), "Internal error: unexpected state");
    }

    #[test]
    fn test_http_status() {
        assert_eq!(Error::invalid_input("x").http_status(), 400);
        assert_eq!(Error::upstream(404, "Not Found").http_status(), 502);
        assert_eq!(Error::Request("timeout".into()).http_status(), 502);
        assert_eq!(Error::Decode("eof".into()).http_status(), 500);
        assert_eq!(Error::internal("x").http_status(), 500);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Error::invalid_input("x").code(), "invalid_input");
        assert_eq!(Error::upstream(500, "").code(), "upstream_error");
        assert_eq!(Error::internal("x").code(), "internal_error");
    }
}
