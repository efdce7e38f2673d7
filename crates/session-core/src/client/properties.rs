//! Session property operations
//!
//! Properties are application-defined key/value metadata attached to the
//! session. Keys are unique and, once present, immutable from the client's
//! perspective: duplicate adds are rejected locally before any request is
//! sent, so the server is never asked to create a colliding key. The server
//! stays authoritative - an add does not update the local map; a subsequent
//! [`update_properties`] observes the stored value.
//!
//! [`update_properties`]: VisualSession::update_properties

use std::collections::{HashMap, HashSet};

use reqwest::Method;

use crate::codec::{self, ApiOutcome};
use crate::error::SessionResult;
use crate::session::{Payload, Property};

use super::manager::VisualSession;

impl VisualSession {
    /// Fetch the property payload and merge it into the local map.
    ///
    /// Requires a connected session with a resolvable properties link;
    /// otherwise `Ok(None)`. Returned is the full merged map - the one
    /// operation that merges instead of replacing, keys from the server
    /// inserted or overwritten over the local set.
    pub async fn update_properties(
        &mut self,
    ) -> SessionResult<Option<HashMap<String, String>>> {
        if !self.is_connected() {
            return Ok(None);
        }
        let Some(url) = self.properties_url() else {
            return Ok(None);
        };
        let response = self.request(Method::GET, url).send().await?;
        match codec::read_json::<Payload>(response).await? {
            ApiOutcome::Success(payload) => {
                self.snapshot.properties.extend(payload.properties);
                Ok(Some(self.snapshot.properties.clone()))
            }
            ApiOutcome::NoContent | ApiOutcome::Rejected(_) => Ok(None),
        }
    }

    /// Add one property to the session.
    ///
    /// Rejected locally with `Ok(false)` and no network call when the name or
    /// value is empty or the key is already present in the local snapshot.
    pub async fn add_property(&self, name: &str, value: &str) -> SessionResult<bool> {
        if !self.is_connected() {
            return Ok(false);
        }
        if name.is_empty() || value.is_empty() || self.snapshot.properties.contains_key(name) {
            return Ok(false);
        }
        self.post_property(&Property::new(name, value)).await
    }

    /// Add several properties in order.
    ///
    /// The whole batch is validated locally first - an empty name or value, a
    /// key already present in the snapshot, or a duplicate within the batch
    /// rejects the call before any request is sent. Posting stops at the
    /// first server rejection.
    pub async fn add_properties(&self, properties: &[Property]) -> SessionResult<bool> {
        if properties.is_empty() || !self.is_connected() {
            return Ok(false);
        }
        let mut seen = HashSet::new();
        for property in properties {
            if property.name.is_empty()
                || property.value.is_empty()
                || self.snapshot.properties.contains_key(&property.name)
                || !seen.insert(property.name.as_str())
            {
                return Ok(false);
            }
        }
        for property in properties {
            if !self.post_property(property).await? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    async fn post_property(&self, property: &Property) -> SessionResult<bool> {
        let Some(url) = self.properties_url() else {
            return Ok(false);
        };
        let response = self
            .request(Method::POST, url)
            .json(property)
            .send()
            .await?;
        codec::read_ack(response).await
    }
}
