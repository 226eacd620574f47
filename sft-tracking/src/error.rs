/// Error types for the tracking API client
use thiserror::Error;

/// Failure talking to the tracking API.
///
/// Callers at the view layer never see these: they are logged and collapsed
/// into an empty list.
#[derive(Error, Debug)]
pub enum TrackingError {
    /// HTTP request failed
    #[cfg(feature = "api")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status code
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    /// Failed to decode the response body
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// History envelope reported `ok: false`
    #[error("History endpoint reported ok=false")]
    NotOk,
}

impl From<serde_json::Error> for TrackingError {
    fn from(e: serde_json::Error) -> Self {
        TrackingError::Decode(e.to_string())
    }
}

/// Type alias for Results using TrackingError
pub type Result<T> = std::result::Result<T, TrackingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_keeps_message() {
        let err: TrackingError = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, TrackingError::Decode(_)));
        assert!(err.to_string().starts_with("Failed to decode response: "));
    }
}
