//! Token selection errors.

use thiserror::Error;

/// Errors raised while choosing the bearer token for a call.
///
/// These are detected before any request is sent.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The call was impersonated but no impersonation token is stored.
    #[error("Impersonation requested for {operation} but no impersonation token is set")]
    MissingImpersonationToken {
        /// Operation that requested impersonation.
        operation: &'static str,
    },

    /// The token contains characters that cannot be sent in a header.
    #[error("Bearer token is not a valid header value")]
    InvalidToken,
}
