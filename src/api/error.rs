//! API Error Types
//!
//! Failures of a call to the activities API, as seen by the client.

use thiserror::Error;

/// Activities API error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx status, with the server's `detail` when it sent a string one
    #[error("Request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The body was missing, not JSON, or not the expected shape
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-supplied detail text, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The server answered with a non-2xx status
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::Status { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_only_for_status() {
        let err = ApiError::Status {
            status: 400,
            detail: Some("Activity full".to_string()),
        };
        assert_eq!(err.detail(), Some("Activity full"));
        assert!(err.is_status());

        assert_eq!(ApiError::Network("offline".into()).detail(), None);
        assert_eq!(ApiError::Decode("eof".into()).detail(), None);
    }

    #[test]
    fn test_display() {
        let err = ApiError::Status { status: 404, detail: None };
        assert_eq!(err.to_string(), "Request failed with status 404");
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "Network error: offline"
        );
    }
}
