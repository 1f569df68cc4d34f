//! Message senders, their assignments and the webhook payloads they receive.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Environment, MessageType, Order, OrderApproval, PartyType, User};

model! {
    /// A webhook endpoint that receives platform notifications (order
    /// submitted, password reset, ...) instead of the built-in emails.
    MessageSender<Xp> / PartialMessageSender {
        required {
            #[serde(rename = "ID")]
            id: String,
            name: String,
            message_types: Vec<MessageType>,
            #[serde(rename = "URL")]
            url: String,
        }
        optional {
            description: String,
            /// Roles granted to the token included in each payload.
            elevated_roles: Vec<String>,
            /// Used to sign payloads; the API does not echo it back.
            shared_key: String,
            #[serde(rename = "xp")]
            xp: Xp,
        }
    }
}

/// Links a message sender to a buyer, supplier, user group or user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageSenderAssignment {
    #[serde(rename = "MessageSenderID")]
    pub message_sender_id: String,
    #[serde(rename = "BuyerID", skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<String>,
    #[serde(rename = "SupplierID", skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(rename = "UserGroupID", skip_serializing_if = "Option::is_none")]
    pub user_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_config_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_config_description: Option<String>,
}

/// Adds CC recipients to one message type of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageCCListenerAssignment {
    pub message_sender_assignment: MessageSenderAssignment,
    pub message_type: MessageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_config_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_config_description: Option<String>,
    #[serde(rename = "BuyerID", skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<String>,
    #[serde(rename = "SupplierID", skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<String>,
    #[serde(rename = "UserGroupID", skip_serializing_if = "Option::is_none")]
    pub user_group_id: Option<String>,
    #[serde(rename = "UserID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<PartyType>,
    /// Email addresses copied on each message.
    #[serde(rename = "CCListenerAddresses", default)]
    pub cc_listener_addresses: Vec<String>,
}

/// Body posted by the platform to a message sender's URL.
///
/// `ConfigData` is whatever the sender's configuration carries; `EventBody`
/// depends on the message type, e.g. [`MessageSenderOrderEventBody`] for
/// order events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageSenderPayload<ConfigData = Value, EventBody = Value> {
    #[serde(rename = "BuyerID", skip_serializing_if = "Option::is_none")]
    pub buyer_id: Option<String>,
    /// Token scoped to the recipient with the sender's elevated roles.
    pub user_token: String,
    pub recipient: User,
    pub message_type: MessageType,
    #[serde(rename = "CCList", default)]
    pub cc_list: Vec<String>,
    pub event_body: EventBody,
    pub config_data: ConfigData,
}

/// Event body of order notifications (submitted, approved, declined and the
/// order return variants).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageSenderOrderEventBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    #[serde(default)]
    pub approvals: Vec<OrderApproval>,
    #[serde(default)]
    pub line_items: Vec<Value>,
    /// Single value as sent by the platform, not a list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_return: Option<Value>,
}

/// Payload of an order submit integration event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderSubmitPayload<ConfigData = Value> {
    /// The submitted order with its line items, shipments and totals.
    pub order_worksheet: Value,
    pub environment: Environment,
    pub order_cloud_access_token: String,
    pub config_data: ConfigData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn message_sender_write_view() {
        let body = PartialMessageSender::<Value> {
            name: Some("Hooks".into()),
            message_types: Some(vec![MessageType::OrderSubmitted]),
            url: Some("https://hooks.example.com".into()),
            shared_key: Some("secret".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "Name": "Hooks",
                "MessageTypes": ["OrderSubmitted"],
                "URL": "https://hooks.example.com",
                "SharedKey": "secret"
            })
        );
    }

    #[test]
    fn assignment_omits_unset_parties() {
        let assignment = MessageSenderAssignment {
            message_sender_id: "ms1".into(),
            buyer_id: Some("b1".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&assignment).unwrap(),
            json!({"MessageSenderID": "ms1", "BuyerID": "b1"})
        );
    }

    #[test]
    fn cc_listener_assignment_uses_api_casing() {
        let wire = json!({
            "MessageSenderAssignment": {"MessageSenderID": "ms1", "BuyerID": "b1"},
            "MessageType": "OrderApproved",
            "UserID": "u1",
            "Level": "User",
            "CCListenerAddresses": ["ops@example.com"]
        });

        let parsed: MessageCCListenerAssignment = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(parsed.cc_listener_addresses, vec!["ops@example.com"]);
        assert_eq!(parsed.user_id.as_deref(), Some("u1"));
        assert_eq!(serde_json::to_value(&parsed).unwrap(), wire);
    }

    #[test]
    fn parses_order_event_payload() {
        #[derive(Debug, PartialEq, Deserialize, Serialize)]
        struct Config {
            #[serde(rename = "Template")]
            template: String,
        }

        let payload: MessageSenderPayload<Config, MessageSenderOrderEventBody> =
            serde_json::from_value(json!({
                "BuyerID": "b1",
                "UserToken": "tok",
                "Recipient": {"ID": "u1", "Username": "buyer", "Active": true},
                "MessageType": "OrderApproved",
                "CCList": ["ops@example.com"],
                "EventBody": {
                    "Order": {
                        "ID": "o1",
                        "Status": "Open",
                        "IsSubmitted": true,
                        "LineItemCount": 1,
                        "Subtotal": 10.0,
                        "ShippingCost": 0.0,
                        "TaxCost": 0.0,
                        "PromotionDiscount": 0.0,
                        "Total": 10.0
                    },
                    "Approvals": [],
                    "LineItems": [{"ID": "li1"}],
                    "Products": {"ID": "p1"}
                },
                "ConfigData": {"Template": "approved"}
            }))
            .unwrap();

        assert_eq!(payload.message_type, MessageType::OrderApproved);
        assert_eq!(payload.config_data.template, "approved");
        assert_eq!(payload.event_body.order.unwrap().id, "o1");
        assert_eq!(payload.event_body.line_items.len(), 1);
        assert_eq!(payload.event_body.products, Some(json!({"ID": "p1"})));
    }

    #[test]
    fn parses_order_submit_payload() {
        let payload: OrderSubmitPayload = serde_json::from_value(json!({
            "OrderWorksheet": {"Order": {"ID": "o1"}},
            "Environment": "Sandbox",
            "OrderCloudAccessToken": "tok",
            "ConfigData": null
        }))
        .unwrap();
        assert_eq!(payload.environment, Environment::Sandbox);
        assert_eq!(payload.order_worksheet["Order"]["ID"], "o1");
    }
}
