//! Wire contract of the reqwest transport against a mock Maximo server.

use maximo_request::config::HttpConfig;
use maximo_request::{Connection, HttpMethod, MaximoClient, RequestType, WorkOrderFields};
use mockito::{Matcher, Server};
use serde_json::json;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

fn client() -> MaximoClient {
    MaximoClient::builder()
        .http_config(HttpConfig {
            timeout: Duration::from_secs(5),
            ..Default::default()
        })
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_create_work_order_over_http() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/maximo/oslc/os/mxapiwo")
        .match_header("apikey", "test-api-key")
        .match_header("accept", "application/json")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "description": "Replace pump seal",
            "siteid": "BEDFORD",
            "assetnum": null,
            "location": null,
            "schedstart": null,
            "reportdate": null
        })))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"wonum":"1001","status":"WAPPR"}"#)
        .create_async()
        .await;

    let connection = Connection::new(server.url()).with_api_key("test-api-key");
    let fields = WorkOrderFields {
        description: Some("Replace pump seal".into()),
        site: Some("BEDFORD".into()),
        ..Default::default()
    };
    let result = client()
        .create_work_order(&connection, fields, &CancellationToken::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.is_success());
    assert_eq!(result.response().unwrap()["wonum"], "1001");
    assert!(result.error().is_none());
}

#[tokio::test]
async fn test_not_found_is_a_failed_result() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/maximo/oslc/os/mxapiwo/404")
        .with_status(404)
        .with_body(r#"{"Error":{"reasonCode":"BMXAA8727E"}}"#)
        .create_async()
        .await;

    let connection = Connection::new(format!("{}/", server.url())).with_api_key("k");
    let result = client()
        .get_work_order(&connection, "404", &CancellationToken::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(!result.is_success());
    assert!(result.response().is_none());
    assert_eq!(
        result.error(),
        Some(r#"HTTP 404: {"Error":{"reasonCode":"BMXAA8727E"}}"#)
    );
}

#[tokio::test]
async fn test_custom_string_payload_is_sent_verbatim() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/maximo/oslc/os/mxapiasset")
        .match_body(Matcher::Exact("{ \"Body\": \"Message\" }".to_string()))
        .with_status(200)
        .with_body(r#"{"hello":"world"}"#)
        .create_async()
        .await;

    let connection = Connection::new(server.url()).with_api_key("k");
    let result = client()
        .custom_request(
            &connection,
            HttpMethod::Put,
            "/maximo/oslc/os/mxapiasset",
            Some(json!("{ \"Body\": \"Message\" }")),
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.response().unwrap()["hello"], "world");
}

#[tokio::test]
async fn test_delete_without_content() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/maximo/oslc/os/mxapisr/42")
        .match_body(Matcher::Exact(String::new()))
        .with_status(204)
        .create_async()
        .await;

    let connection = Connection::new(server.url()).with_api_key("k");
    let result = client()
        .delete_service_request(&connection, "42", &CancellationToken::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(result.is_success());
    assert_eq!(result.response(), Some(&serde_json::Value::Null));
}

#[tokio::test]
async fn test_connection_failure_is_a_failed_result() {
    // Nothing listens on the discard port.
    let connection = Connection::new("http://127.0.0.1:9").with_api_key("k");
    let result = client()
        .get_service_request(&connection, "42", &CancellationToken::new())
        .await
        .unwrap();

    assert!(!result.is_success());
    assert!(result.response().is_none());
    assert!(result.error().unwrap().starts_with("HTTP error"));
}

#[tokio::test]
async fn test_truncated_success_body_is_a_failed_result() {
    // Promises 100 bytes, sends five, then hangs up.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await.unwrap();
        socket
            .write_all(
                b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"hel",
            )
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let connection = Connection::new(format!("http://{}", addr)).with_api_key("k");
    let result = client()
        .get_work_order(&connection, "1001", &CancellationToken::new())
        .await
        .unwrap();
    server.await.unwrap();

    assert!(!result.is_success());
    assert!(result.response().is_none());
    assert!(result
        .error()
        .unwrap()
        .starts_with("Failed to read response body"));
}

#[tokio::test]
async fn test_send_request_entry_point() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/maximo/oslc/os/mxapisr/42")
        .match_header("apikey", "test-api-key")
        .match_body(Matcher::Json(json!({"description": "Valve still leaking"})))
        .with_status(200)
        .with_body(r#"{"ticketid":"42"}"#)
        .create_async()
        .await;

    let mut input = Connection::new(server.url())
        .with_api_key("test-api-key")
        .input(RequestType::UpdateServiceRequest)
        .with_service_request_id("42");
    input.service_request_description = Some("Valve still leaking".into());
    input.reported_by = Some("".into());

    let result = maximo_request::send_request(&input, &CancellationToken::new())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result.response().unwrap()["ticketid"], "42");
}
