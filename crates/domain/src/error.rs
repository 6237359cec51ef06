//! Error types shared across the workspace.
//!
//! The dashboard only knows one failure: the device list could not be
//! fetched. Variants keep the cause apart for logging, but every variant
//! renders as a plain message so the view can display it as-is.

/// Failure to retrieve the device collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connection, CORS, …).
    #[error("{message}")]
    Transport { message: String },

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("invalid response body: {message}")]
    Decode { message: String },
}

impl FetchError {
    /// Build a transport failure from any displayable cause.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Transport {
            message: cause.to_string(),
        }
    }

    /// Build a status failure, rendered as `HTTP <code> <text>`.
    #[must_use]
    pub fn status(status: u16, status_text: &str) -> Self {
        let message = if status_text.is_empty() {
            format!("HTTP {status}")
        } else {
            format!("HTTP {status} {status_text}")
        };
        Self::Status { status, message }
    }

    /// Build a decoding failure from any displayable cause.
    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Self::Decode {
            message: cause.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_transport_message_verbatim() {
        let err = FetchError::transport("Network Error");
        assert_eq!(err.to_string(), "Network Error");
    }

    #[test]
    fn should_display_status_with_text() {
        let err = FetchError::status(503, "Service Unavailable");
        assert_eq!(err.to_string(), "HTTP 503 Service Unavailable");
    }

    #[test]
    fn should_display_status_without_text() {
        let err = FetchError::status(404, "");
        assert_eq!(err.to_string(), "HTTP 404");
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[test]
    fn should_prefix_decode_message() {
        let err = FetchError::decode("expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "invalid response body: expected value at line 1 column 1"
        );
    }
}
