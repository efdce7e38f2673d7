//! Session state machine for the visual channel
//!
//! This module owns the session lifecycle and enforces which operations are
//! legal in which state. The operations are grouped by concern:
//!
//! - **Lifecycle** - `start_session`, `end_session`, `refresh`,
//!   `transfer_session`
//! - **Content** - `send_url`, `send_text`
//! - **Messages** - `get_control_message`, `clear_control_message`
//! - **Properties** - `update_properties`, `add_property`, `add_properties`
//!
//! Every operation follows the same failure contract: local precondition
//! violations short-circuit to `Ok(false)` / `Ok(None)` before the network is
//! touched; server rejections (non-2xx) downgrade to the same; transport
//! faults propagate as `Err` unchanged.

pub mod config;
pub mod manager;

mod content;
mod lifecycle;
mod messages;
mod properties;

pub use config::{Credentials, NotificationType, SessionConfig, StartOptions};
pub use manager::VisualSession;
