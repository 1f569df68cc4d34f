//! Top-level API error type and the error normalizer.

use super::{AuthError, ClientError, ConfigError, DispatchError, RemoteError, ValidationError};
use thiserror::Error;

/// Top-level error type for all OrderCloud operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use ordercloud::ApiError;
///
/// match client.suppliers().get("acme", &Default::default()).await {
///     Ok(supplier) => println!("{}", supplier.name),
///     Err(ApiError::Remote(e)) if e.is_not_found() => println!("no such supplier"),
///     Err(ApiError::Remote(e)) => eprintln!("rejected: {e}"),
///     Err(ApiError::Client(e)) => eprintln!("unreachable: {e}"),
///     Err(other) => eprintln!("{other}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API responded with a non-success status.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// No response was received (network, timeout, cancellation).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Request encoding or response decoding failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Token selection failed before dispatch.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Client configuration or URL construction failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Converts a raw dispatcher failure into the error surfaced to callers.
    ///
    /// Failures that carry a response become [`ApiError::Remote`]; every
    /// other failure keeps its category untouched, so an unreachable server
    /// is never reported as a server-side rejection.
    pub fn normalize(failure: DispatchError) -> Self {
        match failure {
            DispatchError::Response { status, body } => {
                Self::Remote(RemoteError::from_response(status, &body))
            }
            DispatchError::Transport(e) => Self::Client(e),
            DispatchError::Validation(e) => Self::Validation(e),
            DispatchError::Auth(e) => Self::Auth(e),
            DispatchError::Config(e) => Self::Config(e),
        }
    }

    /// Returns the domain error if the API rejected the request.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status of a domain error.
    pub fn status(&self) -> Option<u16> {
        self.as_remote().map(RemoteError::status)
    }

    /// Returns `true` if no response was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Client(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn response_failures_become_remote_errors() {
        let failure = DispatchError::Response {
            status: 409,
            body: Bytes::from_static(br#"{"Errors":[{"ErrorCode":"IdExists","Message":"Conflict"}]}"#),
        };
        assert!(failure.has_response());

        let err = ApiError::normalize(failure);
        assert_eq!(err.status(), Some(409));
        let remote = err.as_remote().unwrap();
        assert_eq!(remote.message(), Some("Conflict"));
        assert_eq!(remote.body()["Errors"][0]["ErrorCode"], "IdExists");
    }

    #[test]
    fn transport_failures_pass_through() {
        let failure = DispatchError::Transport(ClientError::Cancelled);
        assert!(!failure.has_response());

        let err = ApiError::normalize(failure);
        assert!(err.is_transport());
        assert!(matches!(err, ApiError::Client(ClientError::Cancelled)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn local_failures_keep_their_category() {
        let err = ApiError::normalize(DispatchError::Auth(AuthError::InvalidToken));
        assert!(matches!(err, ApiError::Auth(AuthError::InvalidToken)));

        let err = ApiError::normalize(DispatchError::Config(ConfigError::missing_field("x")));
        assert!(matches!(err, ApiError::Config(ConfigError::MissingField { .. })));
    }
}
