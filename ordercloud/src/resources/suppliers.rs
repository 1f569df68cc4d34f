//! Suppliers façade.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::TokenScope;
use crate::client::{Dispatch, OrderCloud, RequestOptions};
use crate::error::ApiError;
use crate::models::{ListPage, PartialSupplier, Supplier};
use crate::operation::Operation;
use crate::query::ListOptions;
use crate::response::{EmptyFormat, JsonFormat};

/// Operation table for `/suppliers`.
pub mod ops {
    use crate::method::RestMethod::{Delete, Get, Patch, Post, Put};
    use crate::operation::Operation;

    pub const LIST: Operation = Operation::new("Suppliers.List", Get, "/suppliers");
    pub const CREATE: Operation = Operation::new("Suppliers.Create", Post, "/suppliers");
    pub const GET: Operation = Operation::new("Suppliers.Get", Get, "/suppliers/{supplierID}");
    pub const SAVE: Operation = Operation::new("Suppliers.Save", Put, "/suppliers/{supplierID}");
    pub const DELETE: Operation =
        Operation::new("Suppliers.Delete", Delete, "/suppliers/{supplierID}");
    pub const PATCH: Operation =
        Operation::new("Suppliers.Patch", Patch, "/suppliers/{supplierID}");

    pub const ALL: [Operation; 6] = [
        LIST,
        CREATE,
        GET,
        SAVE,
        DELETE,
        PATCH,
    ];
}

/// Suppliers façade.
///
/// ## Examples
///
/// ```rust,ignore
/// use ordercloud::query::ListOptions;
///
/// let page = client
///     .suppliers()
///     .as_impersonated()
///     .list(&ListOptions::new().search("acme"), &Default::default())
///     .await?;
/// ```
pub struct Suppliers<'a, Xp = Value> {
    client: &'a OrderCloud,
    scope: TokenScope,
    _xp: PhantomData<fn() -> Xp>,
}

impl<Xp> Clone for Suppliers<'_, Xp> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Xp> Copy for Suppliers<'_, Xp> {}

impl<Xp> fmt::Debug for Suppliers<'_, Xp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suppliers").field("scope", &self.scope).finish()
    }
}

impl<'a, Xp> Suppliers<'a, Xp> {
    pub(crate) fn new(client: &'a OrderCloud, scope: TokenScope) -> Self {
        Self {
            client,
            scope,
            _xp: PhantomData,
        }
    }

    /// Returns a handle whose calls use the impersonation token.
    pub fn as_impersonated(self) -> Self {
        Self::new(self.client, TokenScope::Impersonating)
    }

    /// Alias of [`as_impersonated`](Self::as_impersonated).
    pub fn as_(self) -> Self {
        self.as_impersonated()
    }

    /// Returns a handle that reads and writes `xp` as `T`.
    pub fn with_xp<T>(self) -> Suppliers<'a, T> {
        Suppliers::new(self.client, self.scope)
    }

    pub fn scope(&self) -> TokenScope {
        self.scope
    }

    fn call(&self, operation: &'static Operation) -> Dispatch<'a> {
        self.client.dispatch(operation, self.scope)
    }
}

impl<Xp> Suppliers<'_, Xp>
where
    Xp: Serialize + DeserializeOwned + Send + Sync,
{
    pub async fn list(
        &self,
        options: &ListOptions,
        request: &RequestOptions,
    ) -> Result<ListPage<Supplier<Xp>>, ApiError> {
        self.call(&ops::LIST)
            .query(options)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Creates a supplier. An existing ID yields a 409 conflict.
    pub async fn create(
        &self,
        supplier: &PartialSupplier<Xp>,
        request: &RequestOptions,
    ) -> Result<Supplier<Xp>, ApiError> {
        self.call(&ops::CREATE)
            .json(supplier)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn get(
        &self,
        supplier_id: &str,
        request: &RequestOptions,
    ) -> Result<Supplier<Xp>, ApiError> {
        self.call(&ops::GET)
            .path("supplierID", supplier_id)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Creates or replaces a supplier.
    pub async fn save(
        &self,
        supplier_id: &str,
        supplier: &PartialSupplier<Xp>,
        request: &RequestOptions,
    ) -> Result<Supplier<Xp>, ApiError> {
        self.call(&ops::SAVE)
            .path("supplierID", supplier_id)
            .json(supplier)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn delete(&self, supplier_id: &str, request: &RequestOptions) -> Result<(), ApiError> {
        self.call(&ops::DELETE)
            .path("supplierID", supplier_id)
            .send::<EmptyFormat>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn patch(
        &self,
        supplier_id: &str,
        supplier: &PartialSupplier<Xp>,
        request: &RequestOptions,
    ) -> Result<Supplier<Xp>, ApiError> {
        self.call(&ops::PATCH)
            .path("supplierID", supplier_id)
            .json(supplier)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }
}
