//! Raw dispatcher failures, before normalization.

use bytes::Bytes;
use thiserror::Error;

use super::{AuthError, ClientError, ConfigError, ValidationError};

/// A failure exactly as the dispatcher observed it.
///
/// `Response` is the only variant that carries an HTTP response. Façades
/// never return this type directly; they pass it through
/// [`ApiError::normalize`](super::ApiError::normalize).
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The API answered with a non-success status.
    #[error("HTTP {status}")]
    Response {
        /// Status code of the response.
        status: u16,
        /// Raw response body.
        body: Bytes,
    },

    /// No response was received.
    #[error(transparent)]
    Transport(#[from] ClientError),

    /// The request body or a successful response body could not be converted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No usable bearer token for the requested scope.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The request URL could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DispatchError {
    /// Returns `true` if this failure carries an HTTP response.
    pub fn has_response(&self) -> bool {
        matches!(self, Self::Response { .. })
    }
}
