//! Control-message inbox operations
//!
//! The server queues at most one pending control message per session (e.g. a
//! caller's menu selection). Reads never fail on an empty inbox: "no message"
//! is an ordinary `Ok(None)`. Whether a successful read clears the inbox as a
//! side effect is a configuration choice
//! ([`SessionConfig::with_auto_clear_control_messages`]); the explicit
//! [`clear_control_message`] is available either way.
//!
//! [`SessionConfig::with_auto_clear_control_messages`]:
//!     super::config::SessionConfig::with_auto_clear_control_messages
//! [`clear_control_message`]: VisualSession::clear_control_message

use std::collections::HashMap;

use reqwest::{Method, StatusCode};

use crate::codec::{self, ApiOutcome};
use crate::error::SessionResult;

use super::manager::VisualSession;

impl VisualSession {
    /// Read the pending control message, if any.
    ///
    /// Requires a connected session with a resolvable control-message link;
    /// any failure condition yields `Ok(None)`, never a partial result. When
    /// auto-clear is configured (the default) and a non-empty message was
    /// read, the inbox is cleared best-effort: a failure to clear is logged
    /// but never surfaced as a read failure.
    pub async fn get_control_message(
        &self,
    ) -> SessionResult<Option<HashMap<String, String>>> {
        if !self.is_connected() {
            return Ok(None);
        }
        let Some(url) = self.control_message_url() else {
            return Ok(None);
        };
        let response = self.request(Method::GET, url).send().await?;
        let message = match codec::read_json::<HashMap<String, String>>(response).await? {
            ApiOutcome::Success(message) => message,
            ApiOutcome::NoContent | ApiOutcome::Rejected(_) => return Ok(None),
        };
        if !message.is_empty() && self.config.auto_clear_control_messages {
            match self.clear_control_message().await {
                Ok(cleared) => {
                    if !cleared {
                        tracing::debug!("Control message already cleared");
                    }
                }
                Err(error) => {
                    tracing::warn!("Failed to clear control message after read: {}", error);
                }
            }
        }
        Ok(Some(message))
    }

    /// Clear the pending control message.
    ///
    /// Returns `Ok(true)` when a message was present and is now cleared. A
    /// `304 Not Modified` response means there was nothing to clear and is
    /// reported as `Ok(false)`, distinct in the logs from hard rejections.
    pub async fn clear_control_message(&self) -> SessionResult<bool> {
        if !self.is_connected() {
            return Ok(false);
        }
        let Some(url) = self.control_message_url() else {
            return Ok(false);
        };
        let response = self.request(Method::DELETE, url).send().await?;
        if response.status() == StatusCode::NOT_MODIFIED {
            tracing::debug!("No control message to clear");
            return Ok(false);
        }
        codec::read_ack(response).await
    }
}
