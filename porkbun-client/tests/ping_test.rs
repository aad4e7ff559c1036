//! Ping

mod common;

use common::mock_client;
use porkbun_client::{Context, STATUS_SUCCESS};

#[tokio::test]
async fn test_ping() {
    let (client, transport) = mock_client();
    transport.respond_fixture("/ping", 200, "ping-success.json");

    let ctx = Context::background();
    let ping = require_ok!(client.ping(Some(&ctx)).await);
    assert_eq!(ping.base.status, STATUS_SUCCESS);
    assert_eq!(ping.your_ip, "2404:4400:5401:d900:6b19:e84:33cb:cd66");
}

#[tokio::test]
async fn test_ping_invalid_credentials() {
    let (client, transport) = mock_client();
    transport.respond(
        "/ping",
        400,
        r#"{"status":"ERROR","message":"Invalid API key. (002)"}"#,
    );

    let ctx = Context::background();
    let err = require_err!(client.ping(Some(&ctx)).await);
    assert_eq!(err.api_message(), Some("Invalid API key. (002)"));
    assert!(err.is_expected());
}
