//! Identity handling for menu tree nodes.
//!
//! Persisted categories and options carry whatever id the backing store
//! assigned them. Nodes created in the editor do not have a store id yet;
//! they get a locally allocated id until the next successful commit, after
//! which the refetched canonical list carries the store-assigned ids.
//!
//! The local form is `temp-<millis>-<hex suffix>` so it survives a trip
//! through serialization and can never be mistaken for a store id.

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// String prefix marking a locally allocated id.
pub const LOCAL_ID_PREFIX: &str = "temp-";

/// Errors that can occur when parsing a node id from its string form.
#[derive(Error, Debug)]
pub enum NodeIdError {
    #[error("Node id is empty")]
    Empty,
}

/// Identifier of a category or option in the menu tree.
///
/// The variant records whether the backing store knows about the node.
/// Code must branch on the variant, not on the string form; the prefix
/// only matters at the (de)serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NodeId {
    /// Assigned by the backing store.
    Persisted(String),
    /// Allocated locally; the store has never seen this node.
    Local(LocalId),
}

/// A locally allocated, collision-resistant id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalId(String);

impl LocalId {
    /// Allocates a fresh local id. Infallible.
    pub fn allocate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let suffix: u32 = rand::rng().random();
        Self(format!("{}{}-{:08x}", LOCAL_ID_PREFIX, millis, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl NodeId {
    /// Allocates a fresh local id for a node created in the editor.
    pub fn local() -> Self {
        NodeId::Local(LocalId::allocate())
    }

    /// Wraps an id returned by the backing store.
    pub fn persisted(id: impl Into<String>) -> Self {
        NodeId::Persisted(id.into())
    }

    /// True when the backing store has never seen this node.
    pub fn is_local(&self) -> bool {
        matches!(self, NodeId::Local(_))
    }

    /// The store-assigned id, or None for a local node.
    pub fn persisted_id(&self) -> Option<&str> {
        match self {
            NodeId::Persisted(id) => Some(id),
            NodeId::Local(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeId::Persisted(id) => id,
            NodeId::Local(id) => id.as_str(),
        }
    }

    /// Parses the string form, classifying by the local prefix.
    pub fn parse(s: &str) -> Result<Self, NodeIdError> {
        if s.is_empty() {
            return Err(NodeIdError::Empty);
        }
        if s.starts_with(LOCAL_ID_PREFIX) {
            Ok(NodeId::Local(LocalId(s.to_string())))
        } else {
            Ok(NodeId::Persisted(s.to_string()))
        }
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for NodeId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
