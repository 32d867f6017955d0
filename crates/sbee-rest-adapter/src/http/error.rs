/*
[INPUT]:  Error sources (transport, JSON decode, body serialization, config)
[OUTPUT]: Structured error types tagged with the failing operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the SBEE adapter.
///
/// Every failure carries the name of the API operation that produced it, so a
/// caller multiplexing many endpoints over one client can tell them apart.
#[derive(Error, Debug)]
pub enum SbeeError {
    /// Rejected before any network activity; only GET and POST exist upstream
    #[error("unsupported HTTP method {method}, only GET and POST are accepted")]
    UnsupportedMethod { method: String },

    /// Connection, write, or read failure while talking to the service
    #[error("{op} request failed: {source}")]
    Transport {
        op: &'static str,
        source: reqwest::Error,
    },

    /// Response body is not valid JSON
    #[error("{op} response decode failed: {source}")]
    Decode {
        op: &'static str,
        source: serde_json::Error,
    },

    /// Request body could not be serialized to JSON
    #[error("{op} request body serialization failed: {source}")]
    Serialize {
        op: &'static str,
        source: serde_json::Error,
    },

    /// Base URL or endpoint path is malformed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Client construction or configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl SbeeError {
    /// Name of the API operation that failed, when one is attached.
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            SbeeError::Transport { op, .. }
            | SbeeError::Decode { op, .. }
            | SbeeError::Serialize { op, .. } => Some(op),
            _ => None,
        }
    }

    /// True for connection/write/read failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, SbeeError::Transport { .. })
    }

    /// True when the response body was received but was not JSON.
    pub fn is_decode(&self) -> bool {
        matches!(self, SbeeError::Decode { .. })
    }
}

/// Result type alias for SBEE operations
pub type Result<T> = std::result::Result<T, SbeeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_method_message() {
        let err = SbeeError::UnsupportedMethod {
            method: "DELETE".to_string(),
        };
        assert!(err.to_string().contains("DELETE"));
        assert!(err.operation().is_none());
    }

    #[test]
    fn test_decode_error_carries_operation() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = SbeeError::Decode {
            op: "Tickers",
            source,
        };
        assert_eq!(err.operation(), Some("Tickers"));
        assert!(err.to_string().contains("Tickers"));
        assert!(err.is_decode());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_serialize_error_distinct_from_decode() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SbeeError::Serialize {
            op: "PlaceBatchLimitOrders",
            source,
        };
        assert_eq!(err.operation(), Some("PlaceBatchLimitOrders"));
        assert!(!err.is_decode());
    }
}
