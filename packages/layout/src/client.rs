//! Client handles.
//!
//! A client is a managed application window. The host creates and destroys
//! clients; layouts only hold cheap copies of the handle and never outlive the
//! host's notion of a client.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identity of a managed client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub u64);

impl ClientId {
    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 { self.0 }
}

impl From<u64> for ClientId {
    fn from(id: u64) -> Self { Self(id) }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// A managed client as seen by the layouts: its identity and display name.
///
/// The name is used for introspection and by the slice layout to recognise
/// the client it reserves space for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    name: String,
}

impl Client {
    /// Creates a new client handle.
    #[must_use]
    pub fn new(id: impl Into<ClientId>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }

    /// Returns the client's identity.
    #[must_use]
    pub const fn id(&self) -> ClientId { self.id }

    /// Returns the client's display name.
    #[must_use]
    pub fn name(&self) -> &str { &self.name }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
