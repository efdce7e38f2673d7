//! Hypermedia link registry
//!
//! The server advertises follow-up actions as `(rel, href)` pairs on every
//! session snapshot. The registry holds the link sequence of the *current*
//! snapshot only; it is rebuilt in full whenever the snapshot is replaced and
//! never patched incrementally, so stale links cannot leak across a
//! start/refresh boundary.

use serde::{Deserialize, Serialize};
use url::Url;

/// A hypermedia link returned by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Relation name (e.g. `self`, `/rels/controlmessage`)
    pub rel: String,
    /// Target URI for the relation
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }
}

/// Link relations understood by this client
///
/// The set is closed on the client side, but servers may advertise additional
/// relations; unknown relations are carried in the snapshot untouched and
/// simply never resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkRelation {
    /// The session resource itself
    SelfLink,
    /// The session's control-message inbox
    ControlMessage,
    /// The session's property payload
    Properties,
    /// Back-reference from a sub-resource to its session
    Session,
    /// Server-to-IVR state change notification endpoint
    StateNotification,
    /// Server-to-IVR new message notification endpoint
    MessageNotification,
}

impl LinkRelation {
    /// Wire-level relation name.
    pub const fn rel(self) -> &'static str {
        match self {
            LinkRelation::SelfLink => "self",
            LinkRelation::ControlMessage => "/rels/controlmessage",
            LinkRelation::Properties => "/rels/properties",
            LinkRelation::Session => "/rels/session",
            LinkRelation::StateNotification => "/rels/statenotification",
            LinkRelation::MessageNotification => "/rels/messagenotification",
        }
    }
}

/// Resolves relation names against the current snapshot's links
#[derive(Debug, Clone, Default)]
pub struct LinkRegistry {
    links: Vec<Link>,
}

impl LinkRegistry {
    /// Build a registry from a snapshot's link sequence.
    pub fn from_links(links: &[Link]) -> Self {
        Self {
            links: links.to_vec(),
        }
    }

    /// Resolve a relation to its target URI.
    ///
    /// The scan is case-insensitive and takes the first match. A href that
    /// fails to parse as a URL is reported and treated as unresolved rather
    /// than a fatal error.
    pub fn resolve(&self, relation: LinkRelation) -> Option<Url> {
        let rel = relation.rel();
        let link = self.links.iter().find(|l| l.rel.eq_ignore_ascii_case(rel))?;
        match Url::parse(&link.href) {
            Ok(url) => Some(url),
            Err(error) => {
                tracing::warn!("Cannot parse API uri {}: {}", link.href, error);
                None
            }
        }
    }

    /// The raw link sequence, in server order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
