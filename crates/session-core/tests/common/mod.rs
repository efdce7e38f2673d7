//! Shared scaffolding for the protocol-level tests
//!
//! Each scenario runs the client against a wiremock server that plays the
//! session API: a sessions collection accepting creates, a session resource
//! with control-message and properties sub-resources, and hypermedia links
//! wired back to the mock server's own address.

#![allow(dead_code)]

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rivr_session_core::{SessionConfig, VisualSession};

pub const CALLER_ID: &str = "7202950840";
pub const CALL_ID: &str = "12345";
pub const SESSION_ID: u64 = 1001;

/// Path of the session resource on the mock server.
pub fn session_path() -> String {
    format!("/ivr/api/sessions/{}", SESSION_ID)
}

pub fn control_message_path() -> String {
    format!("{}/controlmessage", session_path())
}

pub fn properties_path() -> String {
    format!("{}/properties", session_path())
}

/// A connected-session snapshot with links pointing back at the mock server.
pub fn session_json(server_uri: &str, status: &str) -> Value {
    let self_uri = format!("{}{}", server_uri, session_path());
    json!({
        "sessionId": SESSION_ID,
        "callerId": CALLER_ID,
        "callId": CALL_ID,
        "status": status,
        "networkQuality": "excellent",
        "networkType": "WiFi",
        "properties": {"TestKey1": "TestValue", "TestKey2": "TestValue"},
        "links": [
            {"rel": "self", "href": self_uri},
            {"rel": "/rels/controlmessage", "href": format!("{}/controlmessage", self_uri)},
            {"rel": "/rels/properties", "href": format!("{}/properties", self_uri)},
        ],
    })
}

/// Client configuration pointed at the mock server.
pub fn config_for(server: &MockServer) -> SessionConfig {
    let address = server.address();
    SessionConfig::new(address.ip().to_string()).with_port(address.port())
}

pub fn manager_for(server: &MockServer) -> VisualSession {
    VisualSession::new(config_for(server)).expect("valid mock server config")
}

/// Accept one session create and answer with a connected snapshot.
pub async fn mount_create_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/ivr/api/sessions"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(session_json(&server.uri(), "connected")),
        )
        .mount(server)
        .await;
}

/// Build a manager and start a connected session against the mock server.
pub async fn start_connected(server: &MockServer) -> VisualSession {
    mount_create_session(server).await;
    let mut session = manager_for(server);
    assert!(
        session
            .start_session(CALLER_ID, CALL_ID)
            .await
            .expect("start_session transport")
    );
    session
}
