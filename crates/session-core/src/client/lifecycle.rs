//! Session lifecycle operations
//!
//! Starting, ending, refreshing, and transferring the session. These are the
//! operations that replace or force the local snapshot; on every success path
//! the snapshot is swapped wholesale and the link registry rebuilt from it.

use reqwest::Method;
use serde::Serialize;
use url::Url;

use crate::codec::{self, ApiOutcome};
use crate::error::{SessionError, SessionResult};
use crate::session::Session;

use super::config::{NotificationType, StartOptions};
use super::manager::VisualSession;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StartRequest<'a> {
    caller_id: &'a str,
    call_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    state_change_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new_message_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification_type: Option<&'static str>,
}

impl<'a> StartRequest<'a> {
    fn build(
        caller_id: &'a str,
        call_id: &'a str,
        options: &StartOptions,
    ) -> SessionResult<Self> {
        Ok(Self {
            caller_id,
            call_id,
            state_change_uri: validated_callback_uri("stateChangeUri", options.state_change_uri.as_deref())?,
            new_message_uri: validated_callback_uri("newMessageUri", options.new_message_uri.as_deref())?,
            notification_type: options.notification_type.map(NotificationType::as_str),
        })
    }
}

/// Validate an optional callback URI: absent or empty passes through as
/// `None`; anything else must parse as an absolute, non-opaque URL.
fn validated_callback_uri(label: &str, raw: Option<&str>) -> SessionResult<Option<String>> {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    let url = Url::parse(raw)
        .map_err(|error| SessionError::config(format!("Invalid {}: {}", label, error)))?;
    if url.cannot_be_a_base() {
        return Err(SessionError::config(format!(
            "Invalid {}: opaque URI not allowed",
            label
        )));
    }
    Ok(Some(url.to_string()))
}

impl VisualSession {
    /// Start a new session for a phone call.
    ///
    /// Equivalent to [`start_session_with_options`] with default options.
    ///
    /// [`start_session_with_options`]: VisualSession::start_session_with_options
    pub async fn start_session(
        &mut self,
        caller_id: &str,
        call_id: &str,
    ) -> SessionResult<bool> {
        self.start_session_with_options(caller_id, call_id, StartOptions::default())
            .await
    }

    /// Start a new session, requesting server-to-IVR notifications.
    ///
    /// Legal only while no session is connected; a start attempted on a
    /// connected session returns `Ok(false)` with the prior snapshot
    /// untouched and no request sent. On success the server's snapshot
    /// replaces the local one and the session takes whatever status the
    /// server reports.
    ///
    /// # Arguments
    ///
    /// * `caller_id` - Phone number (or client id) of the caller
    /// * `call_id` - IVR-side identifier of the phone call
    /// * `options` - Optional notification URIs and style
    ///
    /// # Errors
    ///
    /// * [`SessionError::InvalidConfiguration`] - A notification URI is
    ///   relative or opaque (raised before any request is sent)
    /// * [`SessionError::Transport`] - Connection-level failure
    pub async fn start_session_with_options(
        &mut self,
        caller_id: &str,
        call_id: &str,
        options: StartOptions,
    ) -> SessionResult<bool> {
        if self.is_connected() {
            return Ok(false);
        }
        let body = StartRequest::build(caller_id, call_id, &options)?;
        let response = self
            .request(Method::POST, self.sessions_url.clone())
            .json(&body)
            .send()
            .await?;
        match codec::read_json::<Session>(response).await? {
            ApiOutcome::Success(snapshot) => {
                self.install_snapshot(snapshot);
                tracing::info!(
                    "Started visual session {} for caller {}",
                    self.session_id(),
                    self.caller_id()
                );
                Ok(true)
            }
            ApiOutcome::NoContent | ApiOutcome::Rejected(_) => Ok(false),
        }
    }

    /// End the current session.
    ///
    /// Requires a connected session with a resolvable `self` link; otherwise
    /// returns `Ok(false)` without a network call. On a successful delete the
    /// local status is forced to disconnected regardless of the response
    /// body.
    pub async fn end_session(&mut self) -> SessionResult<bool> {
        if !self.is_connected() {
            return Ok(false);
        }
        let Some(url) = self.self_url() else {
            return Ok(false);
        };
        let response = self.request(Method::DELETE, url).send().await?;
        if codec::read_ack(response).await? {
            self.force_disconnected();
            tracing::info!("Ended visual session {}", self.session_id());
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Re-fetch the session snapshot from the server.
    ///
    /// Legal whenever a `self` link is resolvable, regardless of the believed
    /// status, so a server-side hangup can be detected. A successful response
    /// with a body replaces the whole snapshot (which may itself report
    /// disconnected); a successful response without a body forces the local
    /// status to disconnected.
    pub async fn refresh(&mut self) -> SessionResult<bool> {
        let Some(url) = self.self_url() else {
            return Ok(false);
        };
        let response = self.request(Method::GET, url).send().await?;
        match codec::read_json::<Session>(response).await? {
            ApiOutcome::Success(snapshot) => {
                self.install_snapshot(snapshot);
                Ok(true)
            }
            ApiOutcome::NoContent => {
                self.force_disconnected();
                Ok(true)
            }
            ApiOutcome::Rejected(_) => Ok(false),
        }
    }

    /// Transfer the call to another account.
    ///
    /// Requires a connected session, a resolvable `self` link, and a
    /// non-empty `account_id`. On success the call has been handed off and
    /// the session is no longer controllable from here, so the local status
    /// is forced to disconnected.
    pub async fn transfer_session(&mut self, account_id: &str) -> SessionResult<bool> {
        if !self.is_connected() || account_id.is_empty() {
            return Ok(false);
        }
        let Some(self_url) = self.self_url() else {
            return Ok(false);
        };
        let raw = format!("{}/transfer/{}", self_url, account_id);
        let Ok(transfer_url) = Url::parse(&raw) else {
            tracing::warn!("Cannot build transfer uri from {}", raw);
            return Ok(false);
        };
        let response = self.request(Method::POST, transfer_url).send().await?;
        if codec::read_ack(response).await? {
            // connection is gone
            self.force_disconnected();
            tracing::info!(
                "Transferred visual session {} to account {}",
                self.session_id(),
                account_id
            );
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
