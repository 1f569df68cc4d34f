//! Shared fixtures for integration tests.

#![allow(dead_code)]

use ordercloud::OrderCloud;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const NORMAL_TOKEN: &str = "normal-token";
pub const IMPERSONATION_TOKEN: &str = "impersonation-token";

/// Client pointed at the mock server with both tokens stored.
pub fn client(server: &MockServer) -> OrderCloud {
    OrderCloud::builder()
        .base_url(server.uri())
        .access_token(NORMAL_TOKEN)
        .impersonation_token(IMPERSONATION_TOKEN)
        .build()
        .unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub fn order_json(id: &str) -> Value {
    json!({
        "ID": id,
        "FromUser": {"ID": "buyer-user", "Username": "buyer", "Active": true},
        "FromCompanyID": "buyer-co",
        "ToCompanyID": "seller",
        "Status": "Unsubmitted",
        "IsSubmitted": false,
        "LineItemCount": 1,
        "Subtotal": 10.0,
        "ShippingCost": 2.0,
        "TaxCost": 1.0,
        "PromotionDiscount": 0.0,
        "Total": 13.0,
        "Comments": null,
        "xp": {"Channel": "web"}
    })
}

pub fn supplier_json(id: &str) -> Value {
    json!({
        "ID": id,
        "Name": "Acme",
        "Active": true,
        "DateCreated": "2024-01-01T00:00:00+00:00",
        "AllBuyersCanOrder": true,
        "OwnerID": null,
        "xp": null
    })
}

pub fn list_json(items: Vec<Value>) -> Value {
    let count = items.len();
    json!({
        "Meta": {
            "Page": 1,
            "PageSize": 20,
            "TotalCount": count,
            "TotalPages": 1,
            "ItemRange": [1, count]
        },
        "Items": items
    })
}
