use serde::{Deserialize, Serialize};
use std::fmt;

pub mod error;
pub mod link;
pub mod node;

pub use error::CoreError;
pub use link::{Link, LinkKind};
pub use node::{HostInfo, InterfaceInfo, Node, NodeDetail, SwitchInfo};

/// Identity of a topology node as carried by the controller feed.
///
/// Switch ids are datapath ids (`"00:00:00:00:00:00:00:01"`), interface ids
/// extend the owner's id with a port suffix, host ids are MAC-derived. They
/// are opaque strings here; equality is the only operation the view needs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Node tag as it appears in the topology feed and in persisted layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Switch,
    Interface,
    Host,
}

impl NodeKind {
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Switch => "switch",
            NodeKind::Interface => "interface",
            NodeKind::Host => "host",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for NodeKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "switch" => Ok(NodeKind::Switch),
            "interface" => Ok(NodeKind::Interface),
            "host" => Ok(NodeKind::Host),
            other => Err(CoreError::UnknownNodeKind(other.to_string())),
        }
    }
}
