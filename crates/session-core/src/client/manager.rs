//! The session manager type and its snapshot plumbing
//!
//! [`VisualSession`] owns the HTTP client, the sessions-collection URL built
//! from configuration, and the current server-authoritative snapshot together
//! with the link registry derived from it. Operations live in the sibling
//! modules, grouped by concern (lifecycle, content, messages, properties).

use std::collections::HashMap;

use reqwest::{header, Method};
use url::Url;

use crate::error::SessionResult;
use crate::links::{LinkRegistry, LinkRelation};
use crate::session::{Session, SessionStatus};

use super::config::SessionConfig;

/// Client-side manager for one visual session
///
/// A manager drives a single logical session at a time: it starts as
/// disconnected, is populated by a successful [`start_session`], and may be
/// reused for a new start after the session ends. All operations are
/// sequential single-request calls; the caller serializes use, which the
/// `&mut self` receivers on state-changing operations enforce.
///
/// # Examples
///
/// ```rust,no_run
/// use rivr_session_core::{SessionConfig, VisualSession};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SessionConfig::secure("cvnet.example.com", "ivrbridge", "secret");
/// let mut session = VisualSession::new(config)?;
///
/// if session.start_session("7202950840", "12345").await? {
///     session.send_url("http://example.com/menu.html").await?;
///     session.end_session().await?;
/// }
/// # Ok(())
/// # }
/// ```
///
/// [`start_session`]: VisualSession::start_session
pub struct VisualSession {
    pub(crate) http: reqwest::Client,
    pub(crate) sessions_url: Url,
    pub(crate) config: SessionConfig,
    pub(crate) snapshot: Session,
    pub(crate) links: LinkRegistry,
}

impl VisualSession {
    /// Create a manager from configuration.
    ///
    /// Builds the sessions-collection URL and the HTTP client up front; an
    /// invalid server address is a configuration fault raised here, before
    /// any network access.
    pub fn new(config: SessionConfig) -> SessionResult<Self> {
        let sessions_url = config.sessions_url()?;
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            sessions_url,
            config,
            snapshot: Session::default(),
            links: LinkRegistry::default(),
        })
    }

    /// Server-assigned session id, 0 before any session exists.
    pub fn session_id(&self) -> u64 {
        self.snapshot.session_id
    }

    /// Caller id the session was started with.
    pub fn caller_id(&self) -> &str {
        &self.snapshot.caller_id
    }

    /// Call id the session was started with.
    pub fn call_id(&self) -> &str {
        &self.snapshot.call_id
    }

    /// Connection state as last reported by the server.
    pub fn status(&self) -> SessionStatus {
        self.snapshot.status
    }

    /// Informational network quality from the last snapshot.
    pub fn network_quality(&self) -> &str {
        &self.snapshot.network_quality
    }

    /// Informational network type from the last snapshot.
    pub fn network_type(&self) -> &str {
        &self.snapshot.network_type
    }

    /// Properties attached to the session, as last observed.
    pub fn properties(&self) -> &HashMap<String, String> {
        &self.snapshot.properties
    }

    /// Links advertised by the current snapshot.
    pub fn links(&self) -> &LinkRegistry {
        &self.links
    }

    /// Whether connected-only operations are currently legal.
    pub fn is_connected(&self) -> bool {
        self.snapshot.status.is_connected()
    }

    /// Replace the whole snapshot and rebuild the link registry from it.
    pub(crate) fn install_snapshot(&mut self, snapshot: Session) {
        self.links = LinkRegistry::from_links(&snapshot.links);
        self.snapshot = snapshot;
    }

    /// Mark the local session as ended; the rest of the snapshot is kept.
    pub(crate) fn force_disconnected(&mut self) {
        self.snapshot.status = SessionStatus::Disconnected;
    }

    /// Build a request with the standard headers and credentials applied.
    pub(crate) fn request(&self, method: Method, url: Url) -> reqwest::RequestBuilder {
        let mut request = self
            .http
            .request(method, url)
            .header(header::ACCEPT, "application/json");
        if let Some(credentials) = &self.config.credentials {
            request = request.basic_auth(&credentials.username, Some(&credentials.password));
        }
        request
    }

    pub(crate) fn self_url(&self) -> Option<Url> {
        self.links.resolve(LinkRelation::SelfLink)
    }

    pub(crate) fn control_message_url(&self) -> Option<Url> {
        self.links.resolve(LinkRelation::ControlMessage)
    }

    pub(crate) fn properties_url(&self) -> Option<Url> {
        self.links.resolve(LinkRelation::Properties)
    }
}
