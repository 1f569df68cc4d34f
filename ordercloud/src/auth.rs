//! Bearer token storage and per-call token selection.

use std::fmt;

use parking_lot::RwLock;

use crate::error::AuthError;

/// Which stored token a façade sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TokenScope {
    /// The regular access token.
    #[default]
    Normal,
    /// The impersonation token.
    Impersonating,
}

impl TokenScope {
    pub fn is_impersonating(&self) -> bool {
        matches!(self, Self::Impersonating)
    }
}

#[derive(Default)]
struct TokenSet {
    access: Option<String>,
    refresh: Option<String>,
    impersonation: Option<String>,
}

/// Runtime token store shared by every clone of a client.
///
/// Tokens can be replaced at any time, for example after the caller refreshes
/// them. The refresh token is only stored here; the client never uses it.
///
/// `Debug` output reports which tokens are present, never their values.
#[derive(Default)]
pub struct Tokens {
    inner: RwLock<TokenSet>,
}

impl Tokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn access_token(&self) -> Option<String> {
        self.inner.read().access.clone()
    }

    pub fn set_access_token(&self, token: impl Into<String>) {
        self.inner.write().access = Some(token.into());
    }

    pub fn remove_access_token(&self) {
        self.inner.write().access = None;
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.inner.read().refresh.clone()
    }

    pub fn set_refresh_token(&self, token: impl Into<String>) {
        self.inner.write().refresh = Some(token.into());
    }

    pub fn remove_refresh_token(&self) {
        self.inner.write().refresh = None;
    }

    pub fn impersonation_token(&self) -> Option<String> {
        self.inner.read().impersonation.clone()
    }

    pub fn set_impersonation_token(&self, token: impl Into<String>) {
        self.inner.write().impersonation = Some(token.into());
    }

    pub fn remove_impersonation_token(&self) {
        self.inner.write().impersonation = None;
    }

    /// Chooses the bearer token for one call.
    ///
    /// An explicit per-call token always wins. Otherwise the scope picks the
    /// stored token: `Normal` may resolve to no token at all, while
    /// `Impersonating` without a stored impersonation token is an error.
    pub(crate) fn resolve(
        &self,
        scope: TokenScope,
        explicit: Option<&str>,
        operation: &'static str,
    ) -> Result<Option<String>, AuthError> {
        if let Some(token) = explicit {
            return Ok(Some(token.to_string()));
        }

        let tokens = self.inner.read();
        match scope {
            TokenScope::Normal => Ok(tokens.access.clone()),
            TokenScope::Impersonating => tokens
                .impersonation
                .clone()
                .map(Some)
                .ok_or(AuthError::MissingImpersonationToken { operation }),
        }
    }
}

impl fmt::Debug for Tokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tokens = self.inner.read();
        f.debug_struct("Tokens")
            .field("access", &tokens.access.is_some())
            .field("refresh", &tokens.refresh.is_some())
            .field("impersonation", &tokens.impersonation.is_some())
            .finish()
    }
}
