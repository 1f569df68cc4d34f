//! Suppliers.

model! {
    /// A supplier organization that fulfils orders.
    Supplier<Xp> / PartialSupplier {
        required {
            #[serde(rename = "ID")]
            id: String,
            name: String,
            active: bool,
        }
        optional {
            date_created: String,
            /// When `true`, every buyer may order from this supplier.
            all_buyers_can_order: bool,
            #[serde(rename = "OwnerID")]
            owner_id: String,
            #[serde(rename = "xp")]
            xp: Xp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn create_body_only_carries_set_fields() {
        let body = PartialSupplier::<Value> {
            name: Some("Acme".into()),
            active: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"Name": "Acme", "Active": true})
        );
    }

    #[test]
    fn reads_supplier() {
        let supplier: Supplier = serde_json::from_value(json!({
            "ID": "acme",
            "Name": "Acme",
            "Active": true,
            "DateCreated": "2024-02-01T00:00:00+00:00",
            "AllBuyersCanOrder": false,
            "OwnerID": null,
            "xp": {}
        }))
        .unwrap();
        assert_eq!(supplier.all_buyers_can_order, Some(false));
        assert_eq!(supplier.owner_id, None);
        assert_eq!(supplier.xp, Some(json!({})));
    }
}
