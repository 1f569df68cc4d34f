//! Transport errors: failures where no HTTP response was received.

use thiserror::Error;

/// Errors from the HTTP transport layer.
///
/// Every variant means the server never produced a response the client could
/// read: connection refused, DNS failure, timeout, or a caller-initiated
/// cancellation. A non-success *response* is never a `ClientError`; see
/// [`RemoteError`](super::RemoteError).
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to a network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The caller's cancellation token fired before the response arrived.
    #[error("Request cancelled before a response was received")]
    Cancelled,
}

impl ClientError {
    /// Returns `true` if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }

    /// Returns `true` if the connection could not be established.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_connect())
    }

    /// Returns `true` if the request was cancelled by the caller.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_display() {
        let err = ClientError::Cancelled;
        assert!(err.is_cancelled());
        assert!(!err.is_timeout());
        assert!(!err.is_connect());
        assert_eq!(
            err.to_string(),
            "Request cancelled before a response was received"
        );
    }
}
