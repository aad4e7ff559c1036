//! Nameserver endpoints

mod common;

use common::mock_client;
use porkbun_client::Context;

#[tokio::test]
async fn test_get_name_servers() {
    let (client, transport) = mock_client();
    transport.respond_fixture("/domain/getNs/example.com", 200, "getNs-success.json");

    let ctx = Context::background();
    let response = require_ok!(
        client
            .domains()
            .get_name_servers(Some(&ctx), "example.com")
            .await
    );
    assert_eq!(response.ns.len(), 4);
    assert_eq!(response.ns[0], "curitiba.ns.porkbun.com");
    assert!(response.ns.iter().any(|ns| ns == "fortaleza.ns.porkbun.com"));
}

#[tokio::test]
async fn test_update_name_servers_keeps_order() {
    let (client, transport) = mock_client();
    transport.respond_fixture("/domain/updateNs/example.com", 200, "status-success.json");

    let ctx = Context::background();
    let ns = vec![
        "ns2.example.net".to_string(),
        "ns1.example.net".to_string(),
    ];
    let response = require_ok!(
        client
            .domains()
            .update_name_servers(Some(&ctx), "example.com", ns)
            .await
    );
    assert!(response.is_success());

    let body = transport.last_body();
    assert_eq!(
        body["ns"],
        serde_json::json!(["ns2.example.net", "ns1.example.net"])
    );
    assert!(body.get("apikey").is_some());
}

#[tokio::test]
async fn test_get_name_servers_unknown_domain() {
    let (client, transport) = mock_client();
    transport.respond_fixture(
        "/domain/getNs/unknowndomain.com",
        400,
        "error-invalid-domain.json",
    );

    let ctx = Context::background();
    let err = require_err!(
        client
            .domains()
            .get_name_servers(Some(&ctx), "unknowndomain.com")
            .await
    );
    assert!(err.is_api_error());
}
