//! Orders façade.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::TokenScope;
use crate::client::{Dispatch, OrderCloud, RequestOptions};
use crate::error::ApiError;
use crate::models::{
    ListPage, Order, OrderApproval, OrderApprovalInfo, OrderDirection, OrderPromotion, OrderSplitResult,
    PartialAddress, PartialOrder, PartialShipment, PartialUser, User,
};
use crate::operation::Operation;
use crate::query::{ListOptions, OrderListOptions};
use crate::response::{EmptyFormat, JsonFormat};

/// Operation table for `/orders/{direction}`.
pub mod ops {
    use crate::method::RestMethod::{Delete, Get, Patch, Post, Put};
    use crate::operation::Operation;

    pub const LIST: Operation = Operation::new("Orders.List", Get, "/orders/{direction}");
    pub const CREATE: Operation = Operation::new("Orders.Create", Post, "/orders/{direction}");
    pub const GET: Operation = Operation::new("Orders.Get", Get, "/orders/{direction}/{orderID}");
    pub const SAVE: Operation = Operation::new("Orders.Save", Put, "/orders/{direction}/{orderID}");
    pub const DELETE: Operation =
        Operation::new("Orders.Delete", Delete, "/orders/{direction}/{orderID}");
    pub const PATCH: Operation =
        Operation::new("Orders.Patch", Patch, "/orders/{direction}/{orderID}");
    pub const LIST_APPROVALS: Operation = Operation::new(
        "Orders.ListApprovals",
        Get,
        "/orders/{direction}/{orderID}/approvals",
    );
    pub const APPROVE: Operation =
        Operation::new("Orders.Approve", Post, "/orders/{direction}/{orderID}/approve");
    pub const SET_BILLING_ADDRESS: Operation = Operation::new(
        "Orders.SetBillingAddress",
        Put,
        "/orders/{direction}/{orderID}/billto",
    );
    pub const PATCH_BILLING_ADDRESS: Operation = Operation::new(
        "Orders.PatchBillingAddress",
        Patch,
        "/orders/{direction}/{orderID}/billto",
    );
    pub const CANCEL: Operation =
        Operation::new("Orders.Cancel", Post, "/orders/{direction}/{orderID}/cancel");
    pub const COMPLETE: Operation =
        Operation::new("Orders.Complete", Post, "/orders/{direction}/{orderID}/complete");
    pub const DECLINE: Operation =
        Operation::new("Orders.Decline", Post, "/orders/{direction}/{orderID}/decline");
    pub const LIST_ELIGIBLE_APPROVERS: Operation = Operation::new(
        "Orders.ListEligibleApprovers",
        Get,
        "/orders/{direction}/{orderID}/eligibleapprovers",
    );
    pub const FORWARD: Operation =
        Operation::new("Orders.Forward", Post, "/orders/{direction}/{orderID}/forward");
    pub const PATCH_FROM_USER: Operation = Operation::new(
        "Orders.PatchFromUser",
        Patch,
        "/orders/{direction}/{orderID}/fromuser",
    );
    pub const LIST_PROMOTIONS: Operation = Operation::new(
        "Orders.ListPromotions",
        Get,
        "/orders/{direction}/{orderID}/promotions",
    );
    pub const ADD_PROMOTION: Operation = Operation::new(
        "Orders.AddPromotion",
        Post,
        "/orders/{direction}/{orderID}/promotions/{promoCode}",
    );
    pub const REMOVE_PROMOTION: Operation = Operation::new(
        "Orders.RemovePromotion",
        Delete,
        "/orders/{direction}/{orderID}/promotions/{promoCode}",
    );
    pub const SHIP: Operation =
        Operation::new("Orders.Ship", Post, "/orders/{direction}/{orderID}/ship");
    pub const SET_SHIPPING_ADDRESS: Operation = Operation::new(
        "Orders.SetShippingAddress",
        Put,
        "/orders/{direction}/{orderID}/shipto",
    );
    pub const PATCH_SHIPPING_ADDRESS: Operation = Operation::new(
        "Orders.PatchShippingAddress",
        Patch,
        "/orders/{direction}/{orderID}/shipto",
    );
    pub const SPLIT: Operation =
        Operation::new("Orders.Split", Post, "/orders/{direction}/{orderID}/split");
    pub const SUBMIT: Operation =
        Operation::new("Orders.Submit", Post, "/orders/{direction}/{orderID}/submit");
    pub const VALIDATE: Operation =
        Operation::new("Orders.Validate", Post, "/orders/{direction}/{orderID}/validate");

    /// Every orders operation.
    pub const ALL: [Operation; 25] = [
        LIST,
        CREATE,
        GET,
        SAVE,
        DELETE,
        PATCH,
        LIST_APPROVALS,
        APPROVE,
        SET_BILLING_ADDRESS,
        PATCH_BILLING_ADDRESS,
        CANCEL,
        COMPLETE,
        DECLINE,
        LIST_ELIGIBLE_APPROVERS,
        FORWARD,
        PATCH_FROM_USER,
        LIST_PROMOTIONS,
        ADD_PROMOTION,
        REMOVE_PROMOTION,
        SHIP,
        SET_SHIPPING_ADDRESS,
        PATCH_SHIPPING_ADDRESS,
        SPLIT,
        SUBMIT,
        VALIDATE,
    ];
}

/// Orders façade.
///
/// `Xp` is the type of the order's extended properties.
///
/// ## Examples
///
/// ```rust,ignore
/// use ordercloud::models::{OrderDirection, PartialOrder};
/// use ordercloud::RequestOptions;
///
/// let opts = RequestOptions::default();
/// let order = client.orders().get(OrderDirection::Incoming, "order123", &opts).await?;
///
/// // Same call, sent with the impersonation token.
/// let mine = client
///     .orders()
///     .as_impersonated()
///     .submit(OrderDirection::Outgoing, &order.id, &opts)
///     .await?;
/// ```
pub struct Orders<'a, Xp = Value> {
    client: &'a OrderCloud,
    scope: TokenScope,
    _xp: PhantomData<fn() -> Xp>,
}

impl<Xp> Clone for Orders<'_, Xp> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Xp> Copy for Orders<'_, Xp> {}

impl<Xp> fmt::Debug for Orders<'_, Xp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Orders").field("scope", &self.scope).finish()
    }
}

impl<'a, Xp> Orders<'a, Xp> {
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
    pub fn with_xp<T>(self) -> Orders<'a, T> {
        Orders::new(self.client, self.scope)
    }

    pub fn scope(&self) -> TokenScope {
        self.scope
    }

    fn call(&self, operation: &'static Operation, direction: OrderDirection) -> Dispatch<'a> {
        self.client
            .dispatch(operation, self.scope)
            .path("direction", direction.to_string())
    }

    fn call_order(
        &self,
        operation: &'static Operation,
        direction: OrderDirection,
        order_id: &str,
    ) -> Dispatch<'a> {
        self.call(operation, direction).path("orderID", order_id)
    }
}

impl<'a, Xp> Orders<'a, Xp>
where
    Xp: Serialize + DeserializeOwned + Send + Sync,
{
    /// Lists orders visible to the current user.
    pub async fn list(
        &self,
        direction: OrderDirection,
        options: &OrderListOptions,
        request: &RequestOptions,
    ) -> Result<ListPage<Order<Xp>>, ApiError> {
        self.call(&ops::LIST, direction)
            .query(options)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Creates an order. An existing ID yields a 409 conflict.
    pub async fn create(
        &self,
        direction: OrderDirection,
        order: &PartialOrder<Xp>,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call(&ops::CREATE, direction)
            .json(order)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn get(
        &self,
        direction: OrderDirection,
        order_id: &str,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::GET, direction, order_id)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Creates or replaces an order.
    pub async fn save(
        &self,
        direction: OrderDirection,
        order_id: &str,
        order: &PartialOrder<Xp>,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::SAVE, direction, order_id)
            .json(order)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn delete(
        &self,
        direction: OrderDirection,
        order_id: &str,
        request: &RequestOptions,
    ) -> Result<(), ApiError> {
        self.call_order(&ops::DELETE, direction, order_id)
            .send::<EmptyFormat>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Partially updates an order; only fields set on `order` are sent.
    pub async fn patch(
        &self,
        direction: OrderDirection,
        order_id: &str,
        order: &PartialOrder<Xp>,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::PATCH, direction, order_id)
            .json(order)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn list_approvals(
        &self,
        direction: OrderDirection,
        order_id: &str,
        options: &ListOptions,
        request: &RequestOptions,
    ) -> Result<ListPage<OrderApproval>, ApiError> {
        self.call_order(&ops::LIST_APPROVALS, direction, order_id)
            .query(options)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn approve(
        &self,
        direction: OrderDirection,
        order_id: &str,
        info: &OrderApprovalInfo,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::APPROVE, direction, order_id)
            .json(info)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Sets a one-time billing address.
    pub async fn set_billing_address(
        &self,
        direction: OrderDirection,
        order_id: &str,
        address: &PartialAddress,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::SET_BILLING_ADDRESS, direction, order_id)
            .json(address)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn patch_billing_address(
        &self,
        direction: OrderDirection,
        order_id: &str,
        address: &PartialAddress,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::PATCH_BILLING_ADDRESS, direction, order_id)
            .json(address)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn cancel(
        &self,
        direction: OrderDirection,
        order_id: &str,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::CANCEL, direction, order_id)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Marks an order complete without shipping it.
    pub async fn complete(
        &self,
        direction: OrderDirection,
        order_id: &str,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::COMPLETE, direction, order_id)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn decline(
        &self,
        direction: OrderDirection,
        order_id: &str,
        info: &OrderApprovalInfo,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::DECLINE, direction, order_id)
            .json(info)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Lists users who may approve the order.
    pub async fn list_eligible_approvers(
        &self,
        direction: OrderDirection,
        order_id: &str,
        options: &ListOptions,
        request: &RequestOptions,
    ) -> Result<ListPage<User>, ApiError> {
        self.call_order(&ops::LIST_ELIGIBLE_APPROVERS, direction, order_id)
            .query(options)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Forwards the order's line items to their suppliers.
    pub async fn forward(
        &self,
        direction: OrderDirection,
        order_id: &str,
        request: &RequestOptions,
    ) -> Result<OrderSplitResult, ApiError> {
        self.call_order(&ops::FORWARD, direction, order_id)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Updates the user the order is placed by.
    pub async fn patch_from_user(
        &self,
        direction: OrderDirection,
        order_id: &str,
        user: &PartialUser,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::PATCH_FROM_USER, direction, order_id)
            .json(user)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn list_promotions(
        &self,
        direction: OrderDirection,
        order_id: &str,
        options: &ListOptions,
        request: &RequestOptions,
    ) -> Result<ListPage<OrderPromotion>, ApiError> {
        self.call_order(&ops::LIST_PROMOTIONS, direction, order_id)
            .query(options)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn add_promotion(
        &self,
        direction: OrderDirection,
        order_id: &str,
        promo_code: &str,
        request: &RequestOptions,
    ) -> Result<OrderPromotion, ApiError> {
        self.call_order(&ops::ADD_PROMOTION, direction, order_id)
            .path("promoCode", promo_code)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn remove_promotion(
        &self,
        direction: OrderDirection,
        order_id: &str,
        promo_code: &str,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::REMOVE_PROMOTION, direction, order_id)
            .path("promoCode", promo_code)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Creates a shipment for every line item on the order.
    pub async fn ship(
        &self,
        direction: OrderDirection,
        order_id: &str,
        shipment: &PartialShipment,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::SHIP, direction, order_id)
            .json(shipment)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Sets a one-time shipping address for every line item.
    pub async fn set_shipping_address(
        &self,
        direction: OrderDirection,
        order_id: &str,
        address: &PartialAddress,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::SET_SHIPPING_ADDRESS, direction, order_id)
            .json(address)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn patch_shipping_address(
        &self,
        direction: OrderDirection,
        order_id: &str,
        address: &PartialAddress,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::PATCH_SHIPPING_ADDRESS, direction, order_id)
            .json(address)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Splits the order by supplier without forwarding it.
    pub async fn split(
        &self,
        direction: OrderDirection,
        order_id: &str,
        request: &RequestOptions,
    ) -> Result<OrderSplitResult, ApiError> {
        self.call_order(&ops::SPLIT, direction, order_id)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    pub async fn submit(
        &self,
        direction: OrderDirection,
        order_id: &str,
        request: &RequestOptions,
    ) -> Result<Order<Xp>, ApiError> {
        self.call_order(&ops::SUBMIT, direction, order_id)
            .send::<JsonFormat<_>>(request)
            .await
            .map_err(ApiError::normalize)
    }

    /// Checks that the order can be submitted. Problems come back as a
    /// [`RemoteError`](crate::error::RemoteError).
    pub async fn validate(
        &self,
        direction: OrderDirection,
        order_id: &str,
        request: &RequestOptions,
    ) -> Result<(), ApiError> {
        self.call_order(&ops::VALIDATE, direction, order_id)
            .send::<EmptyFormat>(request)
            .await
            .map_err(ApiError::normalize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::RestMethod;
    use std::collections::HashSet;

    #[test]
    fn operation_ids_are_unique() {
        let ids: HashSet<_> = ops::ALL.iter().map(|op| op.id()).collect();
        assert_eq!(ids.len(), ops::ALL.len());
    }

    #[test]
    fn every_path_is_scoped_by_direction() {
        for op in ops::ALL {
            assert!(op.path().starts_with("/orders/{direction}"), "{}", op.id());
            assert_eq!(op.path_params()[0], "direction");
        }
        assert_eq!(ops::VALIDATE.method(), RestMethod::Post);
        assert_eq!(
            ops::REMOVE_PROMOTION.path_params(),
            vec!["direction", "orderID", "promoCode"]
        );
    }

    #[test]
    fn impersonation_returns_new_handle() {
        let client = OrderCloud::builder().build().unwrap();
        let normal = client.orders();
        let impersonated = normal.as_impersonated();
        assert_eq!(normal.scope(), TokenScope::Normal);
        assert_eq!(impersonated.scope(), TokenScope::Impersonating);
        assert_eq!(impersonated.with_xp::<()>().scope(), TokenScope::Impersonating);
        assert_eq!(client.orders().as_().scope(), TokenScope::Impersonating);
    }
}
