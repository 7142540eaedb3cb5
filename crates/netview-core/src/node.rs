use crate::{NodeId, NodeKind, Vec2};
use serde::{Deserialize, Serialize};

/// Descriptive fields of a switch as reported by the controller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwitchInfo {
    pub name: String,
    pub dpid: String,
    #[serde(default)]
    pub connection: Option<String>,
    #[serde(default)]
    pub ofp_version: Option<String>,
    #[serde(default)]
    pub hardware: Option<String>,
    #[serde(default)]
    pub software: Option<String>,
    #[serde(default)]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub serial: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterfaceInfo {
    pub name: String,
    /// Owner switch id as declared by the feed. Ownership resolution treats
    /// attachment links as canonical and falls back to this field; see the
    /// resolver for the precedence rule.
    #[serde(default)]
    pub owner: Option<NodeId>,
    #[serde(default)]
    pub port_number: Option<u32>,
    /// Port speed in bits per second, absent when the port is down.
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostInfo {
    pub name: String,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Kind-specific payload of a topology node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeDetail {
    Switch(SwitchInfo),
    Interface(InterfaceInfo),
    Host(HostInfo),
}

impl NodeDetail {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeDetail::Switch(_) => NodeKind::Switch,
            NodeDetail::Interface(_) => NodeKind::Interface,
            NodeDetail::Host(_) => NodeKind::Host,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NodeDetail::Switch(s) => &s.name,
            NodeDetail::Interface(i) => &i.name,
            NodeDetail::Host(h) => &h.name,
        }
    }
}

/// A topology node together with its live view state.
///
/// `position` is the free (simulation-owned) coordinate. `pin` is the user
/// override: while set, the node is exempt from automatic layout. Both are
/// view state, not feed data; the feed only supplies identity and detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub detail: NodeDetail,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub pin: Option<Vec2>,
    #[serde(default)]
    pub downlit: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl Node {
    pub fn new(id: impl Into<NodeId>, detail: NodeDetail) -> Self {
        Self {
            id: id.into(),
            detail,
            position: Vec2::default(),
            pin: None,
            downlit: false,
            visible: true,
        }
    }

    pub fn switch(id: impl Into<NodeId>, info: SwitchInfo) -> Self {
        Self::new(id, NodeDetail::Switch(info))
    }

    pub fn interface(id: impl Into<NodeId>, info: InterfaceInfo) -> Self {
        Self::new(id, NodeDetail::Interface(info))
    }

    pub fn host(id: impl Into<NodeId>, info: HostInfo) -> Self {
        Self::new(id, NodeDetail::Host(info))
    }

    pub fn kind(&self) -> NodeKind {
        self.detail.kind()
    }

    pub fn name(&self) -> &str {
        self.detail.name()
    }

    /// The coordinate the node is rendered at: the pin while one is set,
    /// the free position otherwise.
    pub fn effective_position(&self) -> Vec2 {
        self.pin.unwrap_or(self.position)
    }

    pub fn is_pinned(&self) -> bool {
        self.pin.is_some()
    }

    /// Declared owner of an interface node, if the feed carried one.
    pub fn declared_owner(&self) -> Option<&NodeId> {
        match &self.detail {
            NodeDetail::Interface(info) => info.owner.as_ref(),
            _ => None,
        }
    }
}
