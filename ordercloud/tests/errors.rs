//! Error categorisation across the request pipeline.

mod common;

use std::time::Duration;

use common::{client, order_json};
use ordercloud::models::{OrderDirection, PartialOrder};
use ordercloud::{ApiError, ClientError, OrderCloud, RequestOptions};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn api_rejection_is_a_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/orders/Incoming"))
        .respond_with(ResponseTemplate::new(409).set_body_raw(
            r#"{"Errors":[{"ErrorCode":"IdExists","Message":"Conflict","Data":{"ObjectID":"o1"}}]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let err = client(&server)
        .orders()
        .create(
            OrderDirection::Incoming,
            &PartialOrder::<Value>::default(),
            &RequestOptions::default(),
        )
        .await
        .unwrap_err();

    let remote = err.as_remote().expect("remote error");
    assert_eq!(remote.status(), 409);
    assert!(remote.is_conflict());
    assert_eq!(remote.error_code(), Some("IdExists"));
    assert_eq!(remote.message(), Some("Conflict"));
    assert_eq!(err.status(), Some(409));
}

#[tokio::test]
async fn plain_text_error_body_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/orders/Outgoing/o1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client(&server)
        .orders()
        .get(OrderDirection::Outgoing, "o1", &RequestOptions::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert_eq!(err.as_remote().and_then(|r| r.message()), Some("upstream unavailable"));
}

#[tokio::test]
async fn unreachable_server_is_a_client_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = OrderCloud::builder()
        .base_url(format!("http://{addr}"))
        .access_token("t")
        .build()
        .unwrap();

    let err = client
        .suppliers()
        .get("s1", &RequestOptions::default())
        .await
        .unwrap_err();

    assert!(err.is_transport(), "unexpected error: {err:?}");
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn cancellation_aborts_the_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/orders/Incoming/o1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(order_json("o1"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        trigger.cancel();
    });

    let options = RequestOptions::new().with_cancellation(cancel);
    let err = client(&server)
        .orders()
        .get(OrderDirection::Incoming, "o1", &options)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Client(ClientError::Cancelled)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn malformed_success_body_is_a_validation_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/suppliers/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{not json", "application/json"))
        .mount(&server)
        .await;

    let err = client(&server)
        .suppliers()
        .get("s1", &RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)), "unexpected error: {err:?}");
}
