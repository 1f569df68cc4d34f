//! OpenID Connect configurations façade.

use crate::auth::TokenScope;
use crate::client::{Dispatch, OrderCloud, RequestOptions};
use crate::error::ApiError;
use crate::models::{ListPage, OpenIdConnect, PartialOpenIdConnect};
use crate::operation::Operation;
use crate::query::ListOptions;
use crate::response::{EmptyFormat, JsonFormat};

/// Operation table for `/openidconnects`.
pub mod ops {
    use crate::method::RestMethod::{Delete, Get, Patch, Post, Put};
    use crate::operation::Operation;

    pub const LIST: Operation = Operation::new("OpenIdConnects.List", Get, "/openidconnects");
    pub const CREATE: Operation = Operation::new("OpenIdConnects.Create", Post, "/openidconnects");
    pub const GET: Operation =
        Operation::new("OpenIdConnects.Get", Get, "/openidconnects/{openidconnectID}");
    pub const SAVE: Operation =
        Operation::new("OpenIdConnects.Save", Put, "/openidconnects/{openidconnectID}");
    pub const DELETE: Operation =
        Operation::new("OpenIdConnects.Delete", Delete, "/openidconnects/{openidconnectID}");
    pub const PATCH: Operation =
        Operation::new("OpenIdConnects.Patch", Patch, "/openidconnects/{openidconnectID}");

    pub const ALL: [Operation; 6] = [
        LIST,
        CREATE,
        GET,
        SAVE,
        DELETE,
        PATCH,
    ];
}

/// OpenID Connect configurations façade.
#[derive(Debug, Clone, Copy)]
pub struct OpenIdConnects<'a> {
    client: &'a OrderCloud,
    scope: TokenScope,
}

impl<'a> OpenIdConnects<'a> {
    pub(crate) fn new(client: &'a OrderCloud, scope: TokenScope) -> Self {
        Self { client, scope }
    }

    /// Returns a handle whose calls use the impersonation token.
    pub fn as_impersonated(self) -> Self {
        Self::new(self.client, TokenScope::Impersonating)
    }

    /// Alias of [`as_impersonated`](Self::as_impersonated).
    pub fn as_(self) -> Self {
        self.as_impersonated()
    }

    pub fn scope(&self) -> TokenScope {
        self.scope
    }

    fn call(&self, operation: &'static Operation) -> Dispatch<'a> {
        self.client.dispatch(operation, self.scope)
    }

    pub async fn list(
        &self,
        options: &ListOptions,
        request: &RequestOptions,
    ) -> Result<ListPage<OpenIdConnect>, ApiError> {
        self.call(&ops::LIST)
            .query(options)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn create(
        &self,
        config: &PartialOpenIdConnect,
        request: &RequestOptions,
    ) -> Result<OpenIdConnect, ApiError> {
        self.call(&ops::CREATE)
            .json(config)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn get(&self, openid_connect_id: &str, request: &RequestOptions) -> Result<OpenIdConnect, ApiError> {
        self.call(&ops::GET)
            .path("openidconnectID", openid_connect_id)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn save(
        &self,
        openid_connect_id: &str,
        config: &PartialOpenIdConnect,
        request: &RequestOptions,
    ) -> Result<OpenIdConnect, ApiError> {
        self.call(&ops::SAVE)
            .path("openidconnectID", openid_connect_id)
            .json(config)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn delete(&self, openid_connect_id: &str, request: &RequestOptions) -> Result<(), ApiError> {
        self.call(&ops::DELETE)
            .path("openidconnectID", openid_connect_id)
            .send::<EmptyFormat>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn patch(
        &self,
        openid_connect_id: &str,
        config: &PartialOpenIdConnect,
        request: &RequestOptions,
    ) -> Result<OpenIdConnect, ApiError> {
        self.call(&ops::PATCH)
            .path("openidconnectID", openid_connect_id)
            .json(config)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn operation_table_is_consistent() {
        let ids: HashSet<_> = ops::ALL.iter().map(|op| op.id()).collect();
        assert_eq!(ids.len(), ops::ALL.len());
        for op in ops::ALL {
            assert!(op.path().starts_with("/openidconnects"), "{}", op.id());
        }
        assert_eq!(ops::GET.path_params(), vec!["openidconnectID"]);
    }
}
