// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: MIT-0

//! HTTP integration tests for the blocking transport.
//!
//! These tests run a local `axum` stub of the API endpoint on a background
//! `tokio` runtime and point `HttpTransport` at it.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::collections::HashMap;
use std::time::Duration;

use atlantic_net::configuration::TransportOptions;
use atlantic_net::models::{ParamValue, Parameters, RebootType};
use atlantic_net::{AtlanticNet, ClientError, HttpTransport, Transport};
use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::runtime::Runtime;

/// Serves `app` on an ephemeral port.
///
/// Returns the base URL and the runtime, which must be kept alive for the
/// duration of the test.
fn spawn_stub(app: Router) -> (String, Runtime) {
    let runtime = Runtime::new().unwrap();
    let listener = runtime
        .block_on(TcpListener::bind("127.0.0.1:0"))
        .unwrap();
    let address = listener.local_addr().unwrap();
    runtime.spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{address}"), runtime)
}

fn transport(endpoint: String) -> HttpTransport {
    HttpTransport::with_options(TransportOptions {
        endpoint,
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

/// Echoes the query string back as the response body.
async fn echo(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!(query))
}

// =============================================================================
// Transport Tests
// =============================================================================

#[test]
fn test_send_request_passes_arguments_and_parses_response() {
    let (endpoint, _runtime) = spawn_stub(Router::new().route("/", get(echo)));
    let parameters = Parameters::from([
        ("arg1".to_string(), ParamValue::from("value1")),
        ("arg2".to_string(), ParamValue::from("value2")),
    ]);

    let transport = transport(endpoint.clone());
    assert_eq!(transport.endpoint(), endpoint);

    let result = transport.send_request(&parameters).unwrap();

    assert_eq!(result, json!({"arg1": "value1", "arg2": "value2"}));
}

#[test]
fn test_send_request_returns_body_unchanged() {
    let body = json!({"result1": "response_value_1", "result2": "response_value_2"});
    let served = body.clone();
    let app = Router::new().route("/", get(move || async move { Json(served) }));
    let (endpoint, _runtime) = spawn_stub(app);

    let result = transport(endpoint).send_request(&Parameters::new()).unwrap();

    assert_eq!(result, body);
}

#[test]
fn test_send_request_encodes_scalars() {
    let (endpoint, _runtime) = spawn_stub(Router::new().route("/", get(echo)));
    let parameters = Parameters::from([
        ("enablebackup".to_string(), ParamValue::Bool(true)),
        ("serverqty".to_string(), ParamValue::Int(2)),
        ("servername".to_string(), ParamValue::from("api test+server")),
    ]);

    let result = transport(endpoint).send_request(&parameters).unwrap();

    assert_eq!(
        result,
        json!({"enablebackup": "true", "serverqty": "2", "servername": "api test+server"})
    );
}

#[test]
fn test_send_request_fails_when_unsuccessful() {
    let app = Router::new().route(
        "/",
        get(|| async { (StatusCode::NOT_FOUND, Json(json!({"result": "ignored"}))) }),
    );
    let (endpoint, _runtime) = spawn_stub(app);

    let err = transport(endpoint).send_request(&Parameters::new()).unwrap_err();

    assert_eq!(err, ClientError::Unavailable { status: 404 });
    assert!(err.to_string().contains("404"));
    assert_eq!(err.response(), Some(json!({})));
    assert_eq!(err.access_key(), None);
}

#[test]
fn test_send_request_non_200_success_is_unavailable() {
    let app = Router::new().route("/", get(|| async { (StatusCode::CREATED, Json(json!({}))) }));
    let (endpoint, _runtime) = spawn_stub(app);

    let err = transport(endpoint).send_request(&Parameters::new()).unwrap_err();

    assert_eq!(err, ClientError::Unavailable { status: 201 });
}

#[test]
fn test_send_request_redirect_is_unavailable() {
    let app = Router::new()
        .route("/", get(|| async { Redirect::to("/elsewhere") }))
        .route(
            "/elsewhere",
            get(|| async { Json(json!({"leaked": true})) }),
        );
    let (endpoint, _runtime) = spawn_stub(app);

    let err = transport(endpoint).send_request(&Parameters::new()).unwrap_err();

    assert_eq!(err, ClientError::Unavailable { status: 303 });
}

#[test]
fn test_send_request_invalid_json() {
    let app = Router::new().route("/", get(|| async { "{invalid json" }));
    let (endpoint, _runtime) = spawn_stub(app);

    let err = transport(endpoint).send_request(&Parameters::new()).unwrap_err();

    assert!(matches!(err, ClientError::DecodeError(_)));
}

#[test]
fn test_send_request_connection_refused() {
    // Bind then drop a listener to get a port nothing is listening on
    let address = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();

    let err = transport(format!("http://{address}"))
        .send_request(&Parameters::new())
        .unwrap_err();

    assert!(matches!(err, ClientError::RequestError(_)));
}

// =============================================================================
// Client Over HTTP Tests
// =============================================================================

#[test]
fn test_client_signs_request_over_http() {
    async fn reboot(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
        Json(json!({
            "reboot-instanceresponse": {
                "requestid": query["Rndguid"],
                "return": {"Message": "Successfully queued for reboot", "query": query}
            }
        }))
    }
    let (endpoint, _runtime) = spawn_stub(Router::new().route("/", get(reboot)));
    let client = AtlanticNet::with_transport("public_key", "secret", transport(endpoint));

    let result = client.reboot_instance("234", RebootType::Hard).unwrap();

    let query = result["query"].as_object().unwrap();
    assert_eq!(query["Action"], "reboot-instance");
    assert_eq!(query["ACSAccessKeyId"], "public_key");
    assert_eq!(query["Version"], "2010-12-30");
    assert_eq!(query["Format"], "json");
    assert_eq!(query["instanceid"], "234");
    assert_eq!(query["reboottype"], "hard");
    let expected = client.signature(
        query["Timestamp"].as_str().unwrap(),
        query["Rndguid"].as_str().unwrap(),
    );
    assert_eq!(query["Signature"], Value::String(expected));
}

#[test]
fn test_client_reports_api_error_over_http() {
    let app = Router::new().route(
        "/",
        get(|| async { Json(json!({"error": {"message": "Invalid instanceid"}})) }),
    );
    let (endpoint, _runtime) = spawn_stub(app);
    let client = AtlanticNet::with_transport("public_key", "secret", transport(endpoint));

    let err = client.describe_instance("0").unwrap_err();

    assert_eq!(err.to_string(), "Invalid instanceid");
    assert_eq!(err.access_key(), Some("public_key"));
    assert_eq!(
        err.response(),
        Some(json!({"error": {"message": "Invalid instanceid"}}))
    );
}
