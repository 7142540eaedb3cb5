use crate::NodeId;
use serde::{Deserialize, Serialize};

/// Edge tag as it appears in the topology feed.
///
/// `Link` is real network connectivity. The two attachment kinds express
/// ownership (switch to its own interface, interface to a host) and never
/// count as traffic-carrying links for visibility purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinkKind {
    #[serde(rename = "link")]
    Link,
    #[serde(rename = "interface")]
    InterfaceAttachment,
    #[serde(rename = "host")]
    HostAttachment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

impl std::str::FromStr for LinkKind {
    type Err = crate::CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "link" => Ok(LinkKind::Link),
            "interface" => Ok(LinkKind::InterfaceAttachment),
            "host" => Ok(LinkKind::HostAttachment),
            other => Err(crate::CoreError::UnknownLinkKind(other.to_string())),
        }
    }
}

impl Link {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>, kind: LinkKind) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    /// Whether the link touches the given node on either end.
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source == id || &self.target == id
    }
}
