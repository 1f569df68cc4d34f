//! Integration tests for the OpenID Connect façade.

mod common;

use common::{client, list_json};
use ordercloud::models::PartialOpenIdConnect;
use ordercloud::query::ListOptions;
use ordercloud::RequestOptions;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn oidc_json(id: &str) -> Value {
    json!({
        "ID": id,
        "OrderCloudApiClientID": "storefront",
        "ConnectClientID": "idp-client",
        "ConnectClientSecret": null,
        "AppStartUrl": "https://shop.example.com/login?token={0}",
        "AuthorizationEndpoint": "https://idp.example.com/authorize",
        "TokenEndpoint": "https://idp.example.com/token",
        "UrlEncoded": false,
        "IntegrationEventID": null,
        "IntegrationEventName": null,
        "CallSyncUserIntegrationEvent": false,
        "AdditionalIdpScopes": ["profile"]
    })
}

#[tokio::test]
async fn crud_round() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/openidconnects"))
        .and(query_param("sortBy", "ID"))
        .respond_with(ResponseTemplate::new(200).set_body_json(list_json(vec![oidc_json("okta")])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/openidconnects"))
        .and(body_json(json!({"ID": "okta", "ConnectClientID": "idp-client"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(oidc_json("okta")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v1/openidconnects/okta"))
        .and(body_json(json!({"UrlEncoded": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(oidc_json("okta")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/openidconnects/okta"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let opts = RequestOptions::default();
    let oidc = client.open_id_connects();

    let page = oidc
        .list(&ListOptions::new().sort_by("ID"), &opts)
        .await
        .unwrap();
    assert_eq!(page.items[0].token_endpoint.as_deref(), Some("https://idp.example.com/token"));

    let created = oidc
        .create(
            &PartialOpenIdConnect {
                id: Some("okta".into()),
                connect_client_id: Some("idp-client".into()),
                ..Default::default()
            },
            &opts,
        )
        .await
        .unwrap();
    assert_eq!(created.additional_idp_scopes, Some(vec!["profile".to_string()]));

    oidc.patch(
        "okta",
        &PartialOpenIdConnect {
            url_encoded: Some(true),
            ..Default::default()
        },
        &opts,
    )
    .await
    .unwrap();
    oidc.delete("okta", &opts).await.unwrap();
}
