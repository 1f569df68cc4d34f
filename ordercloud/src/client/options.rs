//! Per-call request options.

use std::fmt;

use tokio_util::sync::CancellationToken;

/// Options applied to a single call.
///
/// ## Examples
///
/// ```rust
/// use ordercloud::RequestOptions;
/// use tokio_util::sync::CancellationToken;
///
/// let cancel = CancellationToken::new();
/// let options = RequestOptions::new()
///     .with_access_token("user-token")
///     .with_cancellation(cancel.clone());
///
/// assert_eq!(options.access_token.as_deref(), Some("user-token"));
/// ```
#[derive(Clone, Default)]
pub struct RequestOptions {
    /// Bearer token used instead of any stored token, in every scope.
    pub access_token: Option<String>,
    /// Aborts the call when cancelled before the response is fully received.
    pub cancel: Option<CancellationToken>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

impl fmt::Debug for RequestOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestOptions")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_token() {
        let options = RequestOptions::new().with_access_token("secret");
        let rendered = format!("{options:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
