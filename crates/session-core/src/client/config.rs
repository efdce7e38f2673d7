//! Configuration for the visual session client
//!
//! # Usage Examples
//!
//! ## Anonymous development setup
//!
//! ```rust
//! use rivr_session_core::SessionConfig;
//!
//! let config = SessionConfig::new("cvnet.example.com");
//!
//! // Plain HTTP on the default port
//! assert!(!config.use_https);
//! assert_eq!(config.effective_port(), 80);
//! ```
//!
//! ## Credentialed production setup
//!
//! ```rust
//! use rivr_session_core::SessionConfig;
//!
//! let config = SessionConfig::secure("cvnet.example.com", "ivrbridge", "secret");
//!
//! // Credentials imply HTTPS on 443
//! assert!(config.use_https);
//! assert_eq!(config.effective_port(), 443);
//! assert!(config.credentials.is_some());
//! ```

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::error::{SessionError, SessionResult};

/// HTTP Basic credentials, attached pre-emptively to every request
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Configuration for a [`VisualSession`]
///
/// Built with the `with_*` methods; unset values fall back to the defaults
/// documented on each method.
///
/// [`VisualSession`]: crate::VisualSession
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Host name or address of the session server
    pub server_address: String,
    /// Port override; `None` selects the scheme default (443/80)
    pub server_port: Option<u16>,
    /// Whether to use HTTPS (default false)
    pub use_https: bool,
    /// Basic-auth credentials; `None` means anonymous access
    pub credentials: Option<Credentials>,
    /// Whether a successful control-message read clears the inbox as a side
    /// effect (default true)
    pub auto_clear_control_messages: bool,
    /// Request timeout handed to the HTTP transport (default 30s)
    pub request_timeout: Duration,
}

impl SessionConfig {
    /// Create a configuration for the given server, plain HTTP, anonymous.
    pub fn new(server_address: impl Into<String>) -> Self {
        Self {
            server_address: server_address.into(),
            server_port: None,
            use_https: false,
            credentials: None,
            auto_clear_control_messages: true,
            request_timeout: Duration::from_secs(30),
        }
    }

    /// Create a credentialed HTTPS configuration in one step.
    ///
    /// Deployments that supply credentials are expected to use HTTPS; this
    /// constructor enforces that pairing.
    pub fn secure(
        server_address: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(server_address)
            .with_https(true)
            .with_credentials(username, password)
    }

    /// Override the server port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Select HTTPS or plain HTTP.
    pub fn with_https(mut self, use_https: bool) -> Self {
        self.use_https = use_https;
        self
    }

    /// Attach Basic-auth credentials.
    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Choose between the auto-clearing control-message read (true, default)
    /// and the explicit-clear discipline (false).
    pub fn with_auto_clear_control_messages(mut self, auto_clear: bool) -> Self {
        self.auto_clear_control_messages = auto_clear;
        self
    }

    /// Override the transport request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// The port requests will actually use.
    pub fn effective_port(&self) -> u16 {
        self.server_port
            .unwrap_or(if self.use_https { 443 } else { 80 })
    }

    /// Absolute URL of the sessions collection.
    pub(crate) fn sessions_url(&self) -> SessionResult<Url> {
        if self.server_address.trim().is_empty() {
            return Err(SessionError::config("No server address specified"));
        }
        let scheme = if self.use_https { "https" } else { "http" };
        let raw = format!(
            "{}://{}:{}/ivr/api/sessions",
            scheme,
            self.server_address,
            self.effective_port()
        );
        Url::parse(&raw).map_err(|error| {
            SessionError::config(format!(
                "Invalid server address {}: {}",
                self.server_address, error
            ))
        })
    }
}

/// Notification style requested from the server at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationType {
    /// Plain HTTP callback notifications
    Basic,
    /// CCXML event notifications
    Ccxml,
}

impl NotificationType {
    /// Wire representation expected by the server.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationType::Basic => "basic",
            NotificationType::Ccxml => "CCXML",
        }
    }
}

impl FromStr for NotificationType {
    type Err = SessionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.eq_ignore_ascii_case("basic") {
            Ok(NotificationType::Basic)
        } else if raw.eq_ignore_ascii_case("ccxml") {
            Ok(NotificationType::Ccxml)
        } else {
            Err(SessionError::config(format!(
                "Invalid notification type: {}",
                raw
            )))
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional notification parameters for starting a session
///
/// The notification URIs, when given, must be absolute and non-opaque;
/// violations raise a configuration fault before any request is sent.
///
/// # Examples
///
/// ```rust
/// use rivr_session_core::{NotificationType, StartOptions};
///
/// let options = StartOptions::new()
///     .with_state_change_uri("http://ivr.example.com/1001/state_change")
///     .with_new_message_uri("http://ivr.example.com/1001/new_message")
///     .with_notification_type(NotificationType::Ccxml);
///
/// assert!(options.state_change_uri.is_some());
/// assert_eq!(options.notification_type, Some(NotificationType::Ccxml));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StartOptions {
    /// Callback URI notified on session state changes
    pub state_change_uri: Option<String>,
    /// Callback URI notified when a control message arrives
    pub new_message_uri: Option<String>,
    /// Notification style; server default when `None`
    pub notification_type: Option<NotificationType>,
}

impl StartOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state_change_uri(mut self, uri: impl Into<String>) -> Self {
        self.state_change_uri = Some(uri.into());
        self
    }

    pub fn with_new_message_uri(mut self, uri: impl Into<String>) -> Self {
        self.new_message_uri = Some(uri.into());
        self
    }

    pub fn with_notification_type(mut self, notification_type: NotificationType) -> Self {
        self.notification_type = Some(notification_type);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scheme_ports() {
        assert_eq!(SessionConfig::new("cvnet.example.com").effective_port(), 80);
        assert_eq!(
            SessionConfig::new("cvnet.example.com")
                .with_https(true)
                .effective_port(),
            443
        );
        assert_eq!(
            SessionConfig::new("cvnet.example.com")
                .with_port(8080)
                .effective_port(),
            8080
        );
    }

    #[test]
    fn sessions_url_is_built_from_config() {
        let url = SessionConfig::new("cvnet.example.com")
            .with_port(8080)
            .sessions_url()
            .unwrap();
        assert_eq!(url.as_str(), "http://cvnet.example.com:8080/ivr/api/sessions");
    }

    #[test]
    fn empty_server_address_is_a_configuration_fault() {
        let error = SessionConfig::new("").sessions_url().unwrap_err();
        assert!(matches!(error, SessionError::InvalidConfiguration { .. }));
    }

    #[test]
    fn unparseable_server_address_is_a_configuration_fault() {
        let error = SessionConfig::new("bad host name").sessions_url().unwrap_err();
        assert!(matches!(error, SessionError::InvalidConfiguration { .. }));
    }

    #[test]
    fn secure_config_pairs_credentials_with_https() {
        let config = SessionConfig::secure("cvnet.example.com", "user", "pass");
        assert!(config.use_https);
        assert_eq!(config.effective_port(), 443);
        let credentials = config.credentials.unwrap();
        assert_eq!(credentials.username, "user");
        assert_eq!(credentials.password, "pass");
    }

    #[test]
    fn notification_type_parses_case_insensitively() {
        assert_eq!("basic".parse::<NotificationType>().unwrap(), NotificationType::Basic);
        assert_eq!("BASIC".parse::<NotificationType>().unwrap(), NotificationType::Basic);
        assert_eq!("CCXML".parse::<NotificationType>().unwrap(), NotificationType::Ccxml);
        assert_eq!("ccxml".parse::<NotificationType>().unwrap(), NotificationType::Ccxml);
    }

    #[test]
    fn unknown_notification_type_is_rejected() {
        let error = "push".parse::<NotificationType>().unwrap_err();
        assert!(matches!(error, SessionError::InvalidConfiguration { .. }));
    }
}
