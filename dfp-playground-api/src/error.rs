use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for every playground API call.
///
/// The `Display` text of [`Http`](Self::Http) is exactly `HTTP <status> Error`,
/// which is the prefix the frontend shows to the user.
///
/// # Retryable Errors
///
/// - [`NetworkError`](Self::NetworkError) and [`Timeout`](Self::Timeout)
/// - [`Http`](Self::Http) with status 429, 502, 503 or 504
///
/// The HTTP client only retries these when it was configured with `max_retries > 0`.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code")]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status} Error")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Seconds from the `Retry-After` header, if present.
        retry_after: Option<u64>,
        /// Response body; only ever logged, never shown.
        body: Option<String>,
    },

    /// Connection-level failure (DNS, refused connection, reset, ...).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The response body could not be decoded.
    #[error("Parse error: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// The base URL or a request URI could not be resolved.
    #[error("Invalid URL: {detail}")]
    InvalidUrl {
        /// Details about the offending URL.
        detail: String,
    },
}

impl ApiError {
    /// Build an [`ApiError::Http`] without body or `Retry-After`.
    #[must_use]
    pub const fn http(status: u16) -> Self {
        Self::Http {
            status,
            retry_after: None,
            body: None,
        }
    }

    /// Whether a retry might succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::NetworkError { .. } | Self::Timeout { .. } => true,
            Self::Http { status, .. } => matches!(*status, 429 | 502..=504),
            Self::ParseError { .. } | Self::InvalidUrl { .. } => false,
        }
    }

    /// 是否为预期行为（用户输入错误等），用于日志分级。
    ///
    /// A 4xx answer almost always means a bad filter clause or a missing
    /// network code, so it is logged at `warn`; everything else at `error`.
    #[must_use]
    pub const fn is_expected(&self) -> bool {
        matches!(self, Self::Http { status, .. } if *status >= 400 && *status < 500 && *status != 429)
    }
}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http_error_is_user_prefix() {
        assert_eq!(ApiError::http(400).to_string(), "HTTP 400 Error");
        let e = ApiError::Http {
            status: 500,
            retry_after: None,
            body: Some("Traceback ...".to_string()),
        };
        assert_eq!(e.to_string(), "HTTP 500 Error");
    }

    #[test]
    fn display_network_error() {
        let e = ApiError::NetworkError {
            detail: "connection refused".to_string(),
        };
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn retryable_classification() {
        assert!(ApiError::http(429).is_retryable());
        assert!(ApiError::http(503).is_retryable());
        assert!(!ApiError::http(400).is_retryable());
        assert!(!ApiError::http(500).is_retryable());
        assert!(
            ApiError::NetworkError {
                detail: String::new()
            }
            .is_retryable()
        );
        assert!(
            !ApiError::ParseError {
                detail: String::new()
            }
            .is_retryable()
        );
    }

    #[test]
    fn expected_errors_are_client_side() {
        assert!(ApiError::http(400).is_expected());
        assert!(ApiError::http(403).is_expected());
        assert!(!ApiError::http(429).is_expected());
        assert!(!ApiError::http(500).is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(ApiError::http(401)).unwrap_or_default();
        assert_eq!(json["code"], "Http");
        assert_eq!(json["status"], 401);
    }
}
