use crate::registry::NodeRegistry;
use netview_core::{NodeId, NodeKind, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// View state of one node as persisted in a layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeState {
    pub name: String,
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub fx: Option<f32>,
    #[serde(default)]
    pub fy: Option<f32>,
    #[serde(default)]
    pub downlight: bool,
}

/// The non-node half of a layout: display toggles and map viewport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewSettings {
    #[serde(default = "default_true")]
    pub show_unused_interfaces: bool,
    #[serde(default = "default_true")]
    pub show_disconnected_hosts: bool,
    #[serde(default = "default_true")]
    pub show_topology: bool,
    #[serde(default = "default_true")]
    pub show_map: bool,
    #[serde(default = "default_map_center")]
    pub map_center: [f64; 2],
    #[serde(default = "default_map_zoom")]
    pub map_zoom: f64,
    #[serde(default = "default_transformation")]
    pub topology_transformation: String,
}

fn default_true() -> bool {
    true
}

fn default_map_center() -> [f64; 2] {
    [-97.8445676, 35.3437248]
}

fn default_map_zoom() -> f64 {
    4.0
}

fn default_transformation() -> String {
    "translate(0,0) scale(1)".to_string()
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            show_unused_interfaces: true,
            show_disconnected_hosts: true,
            show_topology: true,
            show_map: true,
            map_center: default_map_center(),
            map_zoom: default_map_zoom(),
            topology_transformation: default_transformation(),
        }
    }
}

/// A named arrangement of the topology, minus the name: layouts are stored
/// under their name server-side, so the name never travels in the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub nodes: BTreeMap<String, NodeState>,
    pub other_settings: ViewSettings,
}

impl LayoutSnapshot {
    /// Freeze the current registry and view settings into a snapshot.
    pub fn capture(registry: &NodeRegistry, settings: &ViewSettings) -> Self {
        let nodes = registry
            .nodes()
            .map(|node| {
                let state = NodeState {
                    name: node.name().to_string(),
                    id: node.id.clone(),
                    kind: node.kind(),
                    x: node.position.x,
                    y: node.position.y,
                    fx: node.pin.map(|p| p.x),
                    fy: node.pin.map(|p| p.y),
                    downlight: node.downlit,
                };
                (node.id.to_string(), state)
            })
            .collect();

        Self {
            nodes,
            other_settings: settings.clone(),
        }
    }

    /// Overlay the snapshot onto a live registry.
    ///
    /// Application is by id and strictly one-directional: a node present in
    /// both gets its position, pin and downlight from the snapshot; a live
    /// node the snapshot does not know keeps its current state; a snapshot
    /// entry with no live counterpart is skipped. Returns how many nodes
    /// were updated.
    pub fn apply(&self, registry: &mut NodeRegistry) -> usize {
        let mut applied = 0;
        for state in self.nodes.values() {
            let Some(node) = registry.find_mut(&state.id) else {
                tracing::debug!(id = %state.id, "layout entry has no live node, skipped");
                continue;
            };
            node.position = Vec2::new(state.x, state.y);
            node.pin = match (state.fx, state.fy) {
                (Some(fx), Some(fy)) => Some(Vec2::new(fx, fy)),
                _ => None,
            };
            node.downlit = state.downlight;
            applied += 1;
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netview_core::{HostInfo, Node, SwitchInfo};

    fn switch(id: &str) -> Node {
        Node::switch(
            id,
            SwitchInfo {
                name: format!("name-{id}"),
                dpid: id.to_string(),
                ..Default::default()
            },
        )
    }

    #[test]
    fn capture_then_apply_restores_view_state() {
        let mut registry = NodeRegistry::new();
        registry.upsert(vec![switch("s1"), switch("s2")], vec![]);
        {
            let s1 = registry.find_mut(&NodeId::new("s1")).unwrap();
            s1.position = Vec2::new(10.0, 20.0);
            s1.pin = Some(Vec2::new(11.0, 21.0));
            s1.downlit = true;
        }

        let snapshot = LayoutSnapshot::capture(&registry, &ViewSettings::default());

        // Scramble, then restore.
        {
            let s1 = registry.find_mut(&NodeId::new("s1")).unwrap();
            s1.position = Vec2::default();
            s1.pin = None;
            s1.downlit = false;
        }
        let applied = snapshot.apply(&mut registry);

        assert_eq!(applied, 2);
        let s1 = registry.find(&NodeId::new("s1")).unwrap();
        assert_eq!(s1.position, Vec2::new(10.0, 20.0));
        assert_eq!(s1.pin, Some(Vec2::new(11.0, 21.0)));
        assert!(s1.downlit);
        let s2 = registry.find(&NodeId::new("s2")).unwrap();
        assert_eq!(s2.pin, None);
    }

    #[test]
    fn apply_skips_unknown_entries_and_leaves_unlisted_nodes_alone() {
        let mut registry = NodeRegistry::new();
        registry.upsert(vec![switch("s1")], vec![]);
        let snapshot = LayoutSnapshot::capture(&registry, &ViewSettings::default());

        // New session: s1 is gone, h9 arrived with a pin the snapshot does
        // not mention.
        registry.upsert(vec![Node::host("h9", HostInfo::default())], vec![]);
        registry.find_mut(&NodeId::new("h9")).unwrap().pin = Some(Vec2::new(5.0, 5.0));

        let applied = snapshot.apply(&mut registry);
        assert_eq!(applied, 0);
        assert_eq!(
            registry.find(&NodeId::new("h9")).unwrap().pin,
            Some(Vec2::new(5.0, 5.0))
        );
    }

    #[test]
    fn half_set_fix_coordinates_do_not_pin() {
        let mut registry = NodeRegistry::new();
        registry.upsert(vec![switch("s1")], vec![]);
        let mut snapshot = LayoutSnapshot::capture(&registry, &ViewSettings::default());
        if let Some(state) = snapshot.nodes.get_mut("s1") {
            state.fx = Some(7.0);
            state.fy = None;
        }

        snapshot.apply(&mut registry);
        assert_eq!(registry.find(&NodeId::new("s1")).unwrap().pin, None);
    }

    #[test]
    fn decodes_the_stored_wire_shape() {
        let raw = r#"{
            "nodes": {
                "00:00:00:00:00:00:00:01": {
                    "name": "sw1",
                    "id": "00:00:00:00:00:00:00:01",
                    "type": "switch",
                    "x": 431.5,
                    "y": 217.25,
                    "fx": 431.5,
                    "fy": null,
                    "downlight": false
                }
            },
            "other_settings": {
                "show_unused_interfaces": false,
                "map_zoom": 6.0
            }
        }"#;

        let snapshot: LayoutSnapshot = serde_json::from_str(raw).unwrap();
        let state = &snapshot.nodes["00:00:00:00:00:00:00:01"];
        assert_eq!(state.kind, NodeKind::Switch);
        assert_eq!(state.fx, Some(431.5));
        assert_eq!(state.fy, None);

        // Absent settings fall back to the defaults.
        assert!(!snapshot.other_settings.show_unused_interfaces);
        assert!(snapshot.other_settings.show_topology);
        assert_eq!(snapshot.other_settings.map_zoom, 6.0);
        assert_eq!(
            snapshot.other_settings.map_center,
            [-97.8445676, 35.3437248]
        );
    }

    #[test]
    fn encodes_a_map_keyed_by_node_id() {
        let mut registry = NodeRegistry::new();
        registry.upsert(vec![switch("s1")], vec![]);
        let snapshot = LayoutSnapshot::capture(&registry, &ViewSettings::default());

        let value = serde_json::to_value(&snapshot).unwrap();
        assert!(value["nodes"]["s1"]["type"] == "switch");
        assert!(value["nodes"]["s1"]["fx"].is_null());
        assert_eq!(
            value["other_settings"]["topology_transformation"],
            "translate(0,0) scale(1)"
        );
    }
}
