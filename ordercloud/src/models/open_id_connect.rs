//! OpenID Connect identity provider configurations.

model! {
    /// Single sign-on configuration linking an API client to an external
    /// identity provider.
    OpenIdConnect / PartialOpenIdConnect {
        required {
            #[serde(rename = "ID")]
            id: String,
        }
        optional {
            #[serde(rename = "OrderCloudApiClientID")]
            order_cloud_api_client_id: String,
            #[serde(rename = "ConnectClientID")]
            connect_client_id: String,
            connect_client_secret: String,
            /// Where the user is sent after authenticating.
            app_start_url: String,
            authorization_endpoint: String,
            token_endpoint: String,
            /// Send the token request form-encoded instead of as JSON.
            url_encoded: bool,
            #[serde(rename = "IntegrationEventID")]
            integration_event_id: String,
            integration_event_name: String,
            call_sync_user_integration_event: bool,
            additional_idp_scopes: Vec<String>,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn id_suffixed_fields_keep_api_casing() {
        let patch = PartialOpenIdConnect {
            order_cloud_api_client_id: Some("client".into()),
            connect_client_id: Some("idp-client".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({"OrderCloudApiClientID": "client", "ConnectClientID": "idp-client"})
        );
    }
}
