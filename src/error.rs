//! Browser-side error types.
//!
//! - [`FetchError`] - Network/fetch failures for page bundle requests
//!
//! Core errors ([`LoadError`], `ThemeError`) live in `signoz_core`; this
//! module only adds what the browser layer produces and converts it.

use std::fmt;

use signoz_core::LoadError;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Browser window not available
    NoWindow,
    /// Failed to create HTTP request
    RequestCreationFailed,
    /// Network request failed (CORS, offline, etc.)
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    HttpError(u16),
    /// Failed to read response body
    ResponseReadFailed,
    /// Invalid response content (not text)
    InvalidContent,
    /// JSON parsing error
    JsonParseError(String),
    /// Request timed out
    Timeout,
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => write!(f, "Browser window not available"),
            Self::RequestCreationFailed => write!(f, "Failed to create request"),
            Self::NetworkError(msg) => write!(f, "Network error: {}", msg),
            Self::HttpError(status) => write!(f, "HTTP error: {}", status),
            Self::ResponseReadFailed => write!(f, "Failed to read response"),
            Self::InvalidContent => write!(f, "Invalid response content"),
            Self::JsonParseError(msg) => write!(f, "JSON parse error: {}", msg),
            Self::Timeout => write!(f, "Request timed out"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<FetchError> for LoadError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Timeout => Self::Timeout,
            FetchError::HttpError(status) => Self::Http(status),
            FetchError::JsonParseError(msg) => Self::Malformed(msg),
            FetchError::InvalidContent | FetchError::ResponseReadFailed => {
                Self::Malformed(err.to_string())
            }
            FetchError::NoWindow
            | FetchError::RequestCreationFailed
            | FetchError::NetworkError(_) => Self::Network(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_load_error() {
        assert_eq!(LoadError::from(FetchError::Timeout), LoadError::Timeout);
        assert_eq!(LoadError::from(FetchError::HttpError(503)), LoadError::Http(503));
        assert_eq!(
            LoadError::from(FetchError::JsonParseError("eof".into())),
            LoadError::Malformed("eof".into())
        );
        assert_eq!(
            LoadError::from(FetchError::NetworkError("offline".into())),
            LoadError::Network("Network error: offline".into())
        );
    }
}
