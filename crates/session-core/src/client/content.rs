//! Sending content to the session
//!
//! URLs and free-text messages both POST to the session's `self` link and are
//! disambiguated by content type: a JSON `{"url": ...}` object versus a
//! `text/plain` body. Neither replaces the snapshot.

use reqwest::{header, Method};
use serde::Serialize;

use crate::codec;
use crate::error::SessionResult;

use super::manager::VisualSession;

#[derive(Serialize)]
struct UrlMessage<'a> {
    url: &'a str,
}

impl VisualSession {
    /// Push a URL to the session for display.
    ///
    /// Requires a connected session and a non-empty URL; otherwise returns
    /// `Ok(false)` without a network call.
    pub async fn send_url(&self, url: &str) -> SessionResult<bool> {
        if !self.is_connected() || url.is_empty() {
            return Ok(false);
        }
        let Some(target) = self.self_url() else {
            return Ok(false);
        };
        let response = self
            .request(Method::POST, target)
            .json(&UrlMessage { url })
            .send()
            .await?;
        codec::read_ack(response).await
    }

    /// Push a free-text message to the session.
    ///
    /// Requires a connected session and a non-empty message; otherwise
    /// returns `Ok(false)` without a network call.
    pub async fn send_text(&self, message: &str) -> SessionResult<bool> {
        if !self.is_connected() || message.is_empty() {
            return Ok(false);
        }
        let Some(target) = self.self_url() else {
            return Ok(false);
        };
        let response = self
            .request(Method::POST, target)
            .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(message.to_owned())
            .send()
            .await?;
        codec::read_ack(response).await
    }
}
