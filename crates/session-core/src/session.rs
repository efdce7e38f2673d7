//! Session data model for the visual channel
//!
//! This module provides the wire-level shapes exchanged with the session API.
//! The [`Session`] snapshot is server-authoritative: every successful
//! state-changing or refresh call replaces the whole snapshot, never parts of
//! it. The one documented exception is the property merge performed by
//! `update_properties`.
//!
//! # Key Components
//!
//! - **Session** - The complete session snapshot as last reported by the server
//! - **SessionStatus** - Connection state driving the legality of operations
//! - **Payload** - The properties sub-resource with its own navigation links
//! - **Property** - A single name/value pair, also used as a request body

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

use crate::links::Link;

/// Connection state of a visual session
///
/// The server reports status as a string; comparison is case-insensitive and
/// any value other than `connected` is treated as [`Disconnected`], which
/// forbids every connected-only operation.
///
/// [`Disconnected`]: SessionStatus::Disconnected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// The phone call has an active companion session
    Connected,
    /// No session, or the session has ended (initial and terminal state)
    #[default]
    Disconnected,
}

impl SessionStatus {
    /// Map a wire-level status string to a status value.
    pub fn from_wire(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("connected") {
            SessionStatus::Connected
        } else {
            SessionStatus::Disconnected
        }
    }

    /// Wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Connected => "connected",
            SessionStatus::Disconnected => "disconnected",
        }
    }

    /// Check whether connected-only operations are currently legal.
    pub fn is_connected(&self) -> bool {
        matches!(self, SessionStatus::Connected)
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SessionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(SessionStatus::from_wire(&raw))
    }
}

impl Serialize for SessionStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Server-authoritative snapshot of a visual session
///
/// Missing fields decode to their defaults, matching a server that omits
/// informational fields. `session_id` is 0 until a session exists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    /// Server-assigned identifier, immutable once assigned
    pub session_id: u64,
    /// Phone number (or client id) of the caller
    pub caller_id: String,
    /// IVR-side identifier of the phone call
    pub call_id: String,
    /// Connection state reported by the server
    pub status: SessionStatus,
    /// Informational network quality description
    pub network_quality: String,
    /// Informational network type description (e.g. "WiFi")
    pub network_type: String,
    /// Application-defined metadata attached to the session
    pub properties: HashMap<String, String>,
    /// Hypermedia links describing available follow-up actions
    pub links: Vec<Link>,
}

/// The properties sub-resource of a session
///
/// Mirrors the session's property map and carries its own links for
/// self/session navigation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    pub properties: HashMap<String, String>,
    pub links: Vec<Link>,
}

/// A single session property, used as a request body when adding one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parsing_is_case_insensitive() {
        assert_eq!(SessionStatus::from_wire("connected"), SessionStatus::Connected);
        assert_eq!(SessionStatus::from_wire("CONNECTED"), SessionStatus::Connected);
        assert_eq!(SessionStatus::from_wire("Connected"), SessionStatus::Connected);
        assert_eq!(SessionStatus::from_wire("disconnected"), SessionStatus::Disconnected);
    }

    #[test]
    fn unrecognized_status_is_disconnected() {
        assert_eq!(SessionStatus::from_wire("suspended"), SessionStatus::Disconnected);
        assert_eq!(SessionStatus::from_wire(""), SessionStatus::Disconnected);
    }

    #[test]
    fn default_session_is_unset() {
        let session = Session::default();
        assert_eq!(session.session_id, 0);
        assert_eq!(session.status, SessionStatus::Disconnected);
        assert!(session.properties.is_empty());
        assert!(session.links.is_empty());
    }

    #[test]
    fn session_decodes_from_api_shape() {
        let raw = r#"{
            "sessionId": 1001,
            "callerId": "7202950840",
            "callId": "12345",
            "status": "connected",
            "networkQuality": "excellent",
            "networkType": "WiFi",
            "properties": {"TestKey1": "TestValue"},
            "links": [
                {"rel": "self", "href": "http://cvnet.example.com/ivr/api/sessions/1001"},
                {"rel": "/rels/controlmessage", "href": "http://cvnet.example.com/ivr/api/sessions/1001/controlmessage"}
            ]
        }"#;
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.session_id, 1001);
        assert_eq!(session.caller_id, "7202950840");
        assert_eq!(session.call_id, "12345");
        assert_eq!(session.status, SessionStatus::Connected);
        assert_eq!(session.network_quality, "excellent");
        assert_eq!(session.network_type, "WiFi");
        assert_eq!(session.properties.get("TestKey1").map(String::as_str), Some("TestValue"));
        assert_eq!(session.links.len(), 2);
    }

    #[test]
    fn session_tolerates_missing_fields() {
        let session: Session = serde_json::from_str(r#"{"sessionId": 7}"#).unwrap();
        assert_eq!(session.session_id, 7);
        assert_eq!(session.status, SessionStatus::Disconnected);
        assert!(session.caller_id.is_empty());
    }

    #[test]
    fn payload_decodes_properties_and_links() {
        let raw = r#"{
            "properties": {"TestKey1": "UpdatedTestValue"},
            "links": [{"rel": "/rels/session", "href": "http://cvnet.example.com/ivr/api/sessions/1001"}]
        }"#;
        let payload: Payload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.properties.len(), 1);
        assert_eq!(payload.links.len(), 1);
    }

    #[test]
    fn property_serializes_as_name_value_object() {
        let encoded = serde_json::to_value(Property::new("key", "value")).unwrap();
        assert_eq!(encoded, serde_json::json!({"name": "key", "value": "value"}));
    }
}
