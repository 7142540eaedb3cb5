use netview_core::{Link, Node, NodeId, NodeKind};
use std::collections::HashMap;

/// The single mutable source of truth for live node positions during a
/// session.
///
/// Nodes are kept in insertion order; that order is the fixed scan order
/// every derived query (ownership resolution in particular) relies on for
/// determinism. A side map gives id lookup without disturbing the order.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    index: HashMap<NodeId, usize>,
    links: Vec<Link>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the working set from a freshly fetched topology graph.
    ///
    /// Merge is by id: a node whose id was already known keeps its pin, so a
    /// topology refresh never un-pins what the user arranged. An id not seen
    /// before starts unpinned. Ids absent from the incoming set are dropped.
    /// Links are replaced wholesale, preserving the feed's order.
    pub fn upsert(&mut self, nodes: Vec<Node>, links: Vec<Link>) {
        let previous: HashMap<NodeId, Option<netview_core::Vec2>> = self
            .nodes
            .drain(..)
            .map(|node| (node.id.clone(), node.pin))
            .collect();
        self.index.clear();

        for mut node in nodes {
            if let Some(pin) = previous.get(&node.id) {
                node.pin = *pin;
            } else {
                node.pin = None;
            }
            self.index.insert(node.id.clone(), self.nodes.len());
            self.nodes.push(node);
        }
        self.links = links;

        tracing::debug!(
            nodes = self.nodes.len(),
            links = self.links.len(),
            "registry refreshed"
        );
    }

    pub fn find(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn find_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.index.get(id).map(|&i| &mut self.nodes[i])
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.nodes.iter_mut()
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.kind() == kind)
    }

    /// All links where the node is source or target. Unknown ids yield an
    /// empty result, never an error.
    pub fn links_of(&self, id: &NodeId) -> Vec<&Link> {
        self.links.iter().filter(|l| l.touches(id)).collect()
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn switch_by_dpid(&self, dpid: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| match &n.detail {
            netview_core::NodeDetail::Switch(info) => info.dpid == dpid,
            _ => false,
        })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netview_core::{HostInfo, InterfaceInfo, LinkKind, SwitchInfo, Vec2};

    fn switch(id: &str) -> Node {
        Node::switch(
            id,
            SwitchInfo {
                name: id.to_string(),
                dpid: id.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn upsert_preserves_pins_for_known_ids() {
        let mut registry = NodeRegistry::new();
        registry.upsert(vec![switch("s1")], vec![]);
        registry.find_mut(&NodeId::new("s1")).unwrap().pin = Some(Vec2::new(40.0, 50.0));

        // A refresh delivers the same id plus a new one.
        registry.upsert(vec![switch("s1"), switch("s2")], vec![]);

        assert_eq!(
            registry.find(&NodeId::new("s1")).unwrap().pin,
            Some(Vec2::new(40.0, 50.0))
        );
        assert_eq!(registry.find(&NodeId::new("s2")).unwrap().pin, None);
    }

    #[test]
    fn upsert_resets_pin_carried_by_incoming_node() {
        let mut registry = NodeRegistry::new();
        let mut incoming = switch("s1");
        incoming.pin = Some(Vec2::new(1.0, 1.0));
        registry.upsert(vec![incoming], vec![]);

        // The id was unknown, so whatever pin the feed carried is discarded.
        assert_eq!(registry.find(&NodeId::new("s1")).unwrap().pin, None);
    }

    #[test]
    fn upsert_drops_stale_ids() {
        let mut registry = NodeRegistry::new();
        registry.upsert(vec![switch("s1"), switch("s2")], vec![]);
        registry.upsert(vec![switch("s2")], vec![]);

        assert!(registry.find(&NodeId::new("s1")).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn links_of_matches_either_end_and_unknown_is_empty() {
        let mut registry = NodeRegistry::new();
        registry.upsert(
            vec![
                switch("s1"),
                Node::interface("s1:1", InterfaceInfo::default()),
                Node::host("h1", HostInfo::default()),
            ],
            vec![
                Link::new("s1", "s1:1", LinkKind::InterfaceAttachment),
                Link::new("s1:1", "h1", LinkKind::HostAttachment),
            ],
        );

        assert_eq!(registry.links_of(&NodeId::new("s1:1")).len(), 2);
        assert_eq!(registry.links_of(&NodeId::new("s1")).len(), 1);
        assert!(registry.links_of(&NodeId::new("nope")).is_empty());
    }

    #[test]
    fn nodes_of_kind_filters() {
        let mut registry = NodeRegistry::new();
        registry.upsert(
            vec![switch("s1"), Node::host("h1", HostInfo::default())],
            vec![],
        );
        assert_eq!(registry.nodes_of_kind(NodeKind::Switch).count(), 1);
        assert_eq!(registry.nodes_of_kind(NodeKind::Host).count(), 1);
        assert_eq!(registry.nodes_of_kind(NodeKind::Interface).count(), 0);
    }

    #[test]
    fn switch_by_dpid_lookup() {
        let mut registry = NodeRegistry::new();
        registry.upsert(vec![switch("00:00:00:01")], vec![]);
        assert!(registry.switch_by_dpid("00:00:00:01").is_some());
        assert!(registry.switch_by_dpid("00:00:00:02").is_none());
    }
}
