use crate::registry::NodeRegistry;
use crate::resolver;
use netview_core::{LinkKind, NodeId, NodeKind};

/// Interfaces that carry no inter-switch link. Attachment links do not
/// count: every interface has one by construction.
pub fn unused_interfaces(registry: &NodeRegistry) -> Vec<NodeId> {
    registry
        .nodes_of_kind(NodeKind::Interface)
        .filter(|iface| {
            !registry
                .links_of(&iface.id)
                .iter()
                .any(|l| l.kind == LinkKind::Link)
        })
        .map(|iface| iface.id.clone())
        .collect()
}

/// Hosts with no links of any kind.
pub fn disconnected_hosts(registry: &NodeRegistry) -> Vec<NodeId> {
    registry
        .nodes_of_kind(NodeKind::Host)
        .filter(|host| registry.links_of(&host.id).is_empty())
        .map(|host| host.id.clone())
        .collect()
}

/// Recompute every node's `visible` flag from the two toggles.
///
/// Only the flag changes; hidden nodes stay in the registry with their
/// positions and pins intact, so flipping a toggle back restores the exact
/// arrangement.
pub fn apply_visibility(
    registry: &mut NodeRegistry,
    show_unused_interfaces: bool,
    show_disconnected_hosts: bool,
) {
    let hidden_interfaces: Vec<NodeId> = if show_unused_interfaces {
        Vec::new()
    } else {
        unused_interfaces(registry)
    };
    let hidden_hosts: Vec<NodeId> = if show_disconnected_hosts {
        Vec::new()
    } else {
        disconnected_hosts(registry)
    };

    for node in registry.nodes_mut() {
        node.visible = true;
    }
    for id in hidden_interfaces.iter().chain(hidden_hosts.iter()) {
        if let Some(node) = registry.find_mut(id) {
            node.visible = false;
        }
    }
}

/// Downlight everything except the switch, its interfaces, and the hosts
/// attached to those interfaces.
pub fn highlight_switch(registry: &mut NodeRegistry, switch_id: &NodeId) {
    let mut lit: Vec<NodeId> = vec![switch_id.clone()];
    let interfaces = resolver::interfaces_of(registry, switch_id);
    for iface_id in &interfaces {
        for link in registry.links_of(iface_id) {
            if link.kind == LinkKind::HostAttachment {
                let other = if &link.source == iface_id {
                    link.target.clone()
                } else {
                    link.source.clone()
                };
                lit.push(other);
            }
        }
    }
    lit.extend(interfaces);

    for node in registry.nodes_mut() {
        node.downlit = !lit.contains(&node.id);
    }
}

/// Clear all downlighting.
pub fn highlight_all(registry: &mut NodeRegistry) {
    for node in registry.nodes_mut() {
        node.downlit = false;
    }
}
