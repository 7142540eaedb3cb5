use netview_core::{
    HostInfo, InterfaceInfo, Link, LinkKind, Node, NodeDetail, NodeId, NodeKind, SwitchInfo,
};
use serde::Deserialize;
use std::collections::HashSet;

/// One node as the feed serializes it: a flat bag of optional fields with a
/// string tag. Conversion into the typed model happens after decode so a
/// single odd entry never fails the whole fetch.
#[derive(Debug, Deserialize)]
pub struct RawNode {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    // switch fields
    #[serde(default)]
    pub dpid: Option<String>,
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
    // interface fields
    #[serde(rename = "switch", default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub port_number: Option<u32>,
    #[serde(default)]
    pub speed: Option<f64>,
    // host fields
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawLink {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Deserialize)]
pub struct RawTopology {
    #[serde(default)]
    pub nodes: Vec<RawNode>,
    #[serde(default)]
    pub links: Vec<RawLink>,
}

impl RawNode {
    fn into_node(self) -> Option<Node> {
        let kind = match self.kind.parse::<NodeKind>() {
            Ok(kind) => kind,
            Err(e) => {
                tracing::warn!(id = %self.id, "{e}, node dropped");
                return None;
            }
        };
        let name = self.name.unwrap_or_else(|| self.id.clone());
        let detail = match kind {
            NodeKind::Switch => NodeDetail::Switch(SwitchInfo {
                name,
                dpid: self.dpid.unwrap_or_else(|| self.id.clone()),
                connection: self.connection,
                ofp_version: self.ofp_version,
                hardware: self.hardware,
                software: self.software,
                manufacturer: self.manufacturer,
                serial: self.serial,
            }),
            NodeKind::Interface => NodeDetail::Interface(InterfaceInfo {
                name,
                owner: self.owner.map(NodeId::new),
                port_number: self.port_number,
                speed: self.speed,
            }),
            NodeKind::Host => NodeDetail::Host(HostInfo {
                name,
                mac: self.mac,
                address: self.address,
            }),
        };
        Some(Node::new(self.id, detail))
    }
}

impl RawLink {
    fn kind(&self) -> Option<LinkKind> {
        match self.kind.parse::<LinkKind>() {
            Ok(kind) => Some(kind),
            Err(e) => {
                tracing::warn!("{e}, link dropped");
                None
            }
        }
    }
}

impl RawTopology {
    /// Convert the decoded feed into the typed graph, in feed order.
    ///
    /// Nodes with an unrecognized kind and links referencing an id that did
    /// not survive conversion are dropped with a warning instead of failing
    /// the fetch.
    pub fn into_graph(self) -> (Vec<Node>, Vec<Link>) {
        let nodes: Vec<Node> = self
            .nodes
            .into_iter()
            .filter_map(RawNode::into_node)
            .collect();

        let known: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let links = self
            .links
            .into_iter()
            .filter_map(|raw| {
                let kind = raw.kind()?;
                if !known.contains(raw.source.as_str()) || !known.contains(raw.target.as_str()) {
                    tracing::warn!(
                        source = %raw.source,
                        target = %raw.target,
                        "link references unknown node, dropped"
                    );
                    return None;
                }
                Some(Link::new(raw.source, raw.target, kind))
            })
            .collect();

        (nodes, links)
    }
}
