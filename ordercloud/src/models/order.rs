//! Orders and the models their operations exchange.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ApprovalStatus, OrderStatus};

model! {
    /// A user, as seen on an order or in an approver list.
    User<Xp> / PartialUser {
        required {
            #[serde(rename = "ID")]
            id: String,
            username: String,
            active: bool,
        }
        optional {
            first_name: String,
            last_name: String,
            email: String,
            phone: String,
            terms_accepted: String,
            available_roles: Vec<String>,
            date_created: String,
            password_last_set_date: String,
            #[serde(rename = "xp")]
            xp: Xp,
        }
    }
}

model! {
    /// A postal address.
    Address<Xp> / PartialAddress {
        required {}
        optional {
            #[serde(rename = "ID")]
            id: String,
            date_created: String,
            company_name: String,
            first_name: String,
            last_name: String,
            street1: String,
            street2: String,
            city: String,
            state: String,
            zip: String,
            country: String,
            phone: String,
            address_name: String,
            #[serde(rename = "xp")]
            xp: Xp,
        }
    }
}

model! {
    /// An order placed by a buyer user.
    ///
    /// Totals are computed by the API; values sent for them are ignored.
    Order<Xp> / PartialOrder {
        required {
            #[serde(rename = "ID")]
            id: String,
            status: OrderStatus,
            is_submitted: bool,
            line_item_count: u32,
            subtotal: f64,
            shipping_cost: f64,
            tax_cost: f64,
            promotion_discount: f64,
            total: f64,
        }
        optional {
            from_user: User,
            #[serde(rename = "FromCompanyID")]
            from_company_id: String,
            #[serde(rename = "ToCompanyID")]
            to_company_id: String,
            #[serde(rename = "FromUserID")]
            from_user_id: String,
            #[serde(rename = "BillingAddressID")]
            billing_address_id: String,
            billing_address: Address,
            #[serde(rename = "ShippingAddressID")]
            shipping_address_id: String,
            comments: String,
            currency: String,
            date_created: String,
            date_submitted: String,
            date_approved: String,
            date_declined: String,
            date_canceled: String,
            date_completed: String,
            last_updated: String,
            #[serde(rename = "xp")]
            xp: Xp,
        }
    }
}

model! {
    /// A shipment of some or all of an order's line items.
    Shipment<Xp> / PartialShipment {
        required {}
        optional {
            #[serde(rename = "ID")]
            id: String,
            #[serde(rename = "BuyerID")]
            buyer_id: String,
            shipper: String,
            date_shipped: String,
            date_delivered: String,
            tracking_number: String,
            cost: f64,
            account: String,
            #[serde(rename = "FromAddressID")]
            from_address_id: String,
            #[serde(rename = "ToAddressID")]
            to_address_id: String,
            from_address: Address,
            to_address: Address,
            #[serde(rename = "xp")]
            xp: Xp,
        }
    }
}

/// One approval step on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderApproval {
    #[serde(rename = "ApprovalRuleID")]
    pub approval_rule_id: String,
    #[serde(rename = "ApprovingGroupID")]
    pub approving_group_id: String,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub allow_resubmit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_completed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Body for approving or declining an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderApprovalInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Lets the buyer resubmit a declined order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_resubmit: Option<bool>,
}

impl OrderApprovalInfo {
    pub fn with_comments(comments: impl Into<String>) -> Self {
        Self {
            comments: Some(comments.into()),
            allow_resubmit: None,
        }
    }
}

/// A promotion applied to an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderPromotion<Xp = Value> {
    #[serde(rename = "ID")]
    pub id: String,
    pub code: String,
    /// Discount this promotion contributes to the order.
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "LineItemID", skip_serializing_if = "Option::is_none")]
    pub line_item_id: Option<String>,
    #[serde(default)]
    pub line_item_level: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redemption_limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redemption_limit_per_user: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redemption_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fine_print: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible_expression: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_expression: Option<String>,
    #[serde(default)]
    pub can_combine: bool,
    #[serde(default)]
    pub allow_all_buyers: bool,
    #[serde(rename = "OwnerID", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "xp", skip_serializing_if = "Option::is_none")]
    pub xp: Option<Xp>,
}

/// Result of forwarding or splitting an order across suppliers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderSplitResult {
    /// One order per supplier.
    #[serde(default)]
    pub outgoing_orders: Vec<Order>,
    /// Line items that stay on the original order.
    #[serde(rename = "RemainingLineItemIDs", default)]
    pub remaining_line_item_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_json() -> Value {
        json!({
            "ID": "order123",
            "FromUser": {"ID": "u1", "Username": "buyer", "Active": true, "xp": null},
            "FromCompanyID": "buyer-co",
            "BillingAddress": null,
            "Comments": null,
            "Status": "Open",
            "IsSubmitted": true,
            "LineItemCount": 2,
            "Subtotal": 20.0,
            "ShippingCost": 5.0,
            "TaxCost": 1.5,
            "PromotionDiscount": 0.0,
            "Total": 26.5,
            "xp": {"Channel": "web"}
        })
    }

    #[test]
    fn read_view_uses_api_field_names() {
        let order: Order = serde_json::from_value(order_json()).unwrap();
        assert_eq!(order.id, "order123");
        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(order.from_company_id.as_deref(), Some("buyer-co"));
        assert_eq!(order.from_user.as_ref().unwrap().username, "buyer");
        assert_eq!(order.comments, None);
        assert_eq!(order.xp.as_ref().unwrap()["Channel"], "web");
    }

    #[test]
    fn typed_extended_properties() {
        #[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
        struct OrderXp {
            #[serde(rename = "Channel")]
            channel: String,
        }

        let order: Order<OrderXp> = serde_json::from_value(order_json()).unwrap();
        assert_eq!(order.xp.unwrap().channel, "web");
    }

    #[test]
    fn partial_view_only_sends_set_fields() {
        let patch = PartialOrder::<Value> {
            comments: Some("Rush".into()),
            shipping_address_id: Some("addr1".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"Comments": "Rush", "ShippingAddressID": "addr1"})
        );
        assert_eq!(serde_json::to_value(PartialAddress::<Value>::default()).unwrap(), json!({}));
    }

    #[test]
    fn full_view_converts_to_partial() {
        let order: Order = serde_json::from_value(order_json()).unwrap();
        let partial = PartialOrder::from(order.clone());
        assert_eq!(partial.id.as_deref(), Some("order123"));
        assert_eq!(partial.total, Some(26.5));
        assert_eq!(partial.comments, None);
        assert_eq!(partial.xp, order.xp);
    }

    #[test]
    fn approval_info_omits_unset_fields() {
        let info = OrderApprovalInfo::with_comments("ok");
        assert_eq!(serde_json::to_value(&info).unwrap(), json!({"Comments": "ok"}));
    }
}
