//! # rivr-session-core
//!
//! Client-side session management for the visual channel of an IVR platform.
//! A phone call is paired with a remote *visual session* that can receive
//! URLs, text messages, and structured properties, and that exposes a
//! pollable control-message inbox. This crate owns the session's lifecycle
//! against the platform's hypermedia REST API: it discovers and caches the
//! server-supplied action links, translates high-level operations into the
//! correct HTTP requests, and interprets success, failure, and state changes
//! from the responses.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Caller (CLI / GUI)    │
//! └───────────┬─────────────┘
//!             │
//! ┌───────────▼─────────────┐
//! │     VisualSession       │ ◄── session state machine
//! │ ┌─────────────────────┐ │
//! │ │ start / end         │ │
//! │ │ refresh / transfer  │ │
//! │ │ send_url / send_text│ │
//! │ │ control messages    │ │
//! │ │ properties          │ │
//! │ └─────────────────────┘ │
//! └─────┬──────────┬────────┘
//!       │          │
//! ┌─────▼────┐ ┌───▼──────┐
//! │ Link     │ │ Resource │
//! │ Registry │ │ Codec    │
//! └─────┬────┘ └───┬──────┘
//!       └────┬─────┘
//!     ┌──────▼───────┐
//!     │ HTTP (reqwest)│
//!     └───────────────┘
//! ```
//!
//! The [`Session`] snapshot is server-authoritative and replaced wholesale on
//! every successful state-changing or refresh call; the [`LinkRegistry`] is
//! rebuilt from each fresh snapshot so stale links never survive a
//! start/refresh boundary.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use rivr_session_core::{SessionConfig, VisualSession};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SessionConfig::secure("cvnet.example.com", "ivrbridge", "secret");
//! let mut session = VisualSession::new(config)?;
//!
//! // Pair the phone call with a visual session
//! if session.start_session("7202950840", "12345").await? {
//!     // Push content to the caller's device
//!     session.send_url("http://example.com/menu.html").await?;
//!
//!     // Poll for the caller's selection
//!     if let Some(message) = session.get_control_message().await? {
//!         println!("caller selected: {:?}", message);
//!     }
//!
//!     session.end_session().await?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Failure Model
//!
//! Three failure classes, kept strictly apart:
//!
//! - **Configuration faults** ([`SessionError::InvalidConfiguration`]) -
//!   invalid arguments caught before any network access.
//! - **Transport faults** ([`SessionError::Transport`],
//!   [`SessionError::Decode`]) - propagated as `Err`, never retried.
//! - **Operation failures** - wrong state, unresolved link, or a server
//!   rejection; reported as `Ok(false)` / `Ok(None)` with the snapshot
//!   unchanged.

pub mod client;
pub mod error;
pub mod links;
pub mod session;

mod codec;

pub use client::{Credentials, NotificationType, SessionConfig, StartOptions, VisualSession};
pub use error::{SessionError, SessionResult};
pub use links::{Link, LinkRegistry, LinkRelation};
pub use session::{Payload, Property, Session, SessionStatus};
