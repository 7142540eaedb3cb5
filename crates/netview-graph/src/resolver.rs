use crate::registry::NodeRegistry;
use netview_core::{LinkKind, NodeId, NodeKind};

/// Switch/interface ownership resolution.
///
/// The feed carries ownership twice: as `InterfaceAttachment` links and as a
/// declared `owner` field on interface nodes. The attachment link is
/// canonical here. Links are scanned in feed order and the first attachment
/// targeting the interface wins; the declared field is consulted only when
/// no attachment link exists for the interface at all.
pub fn owner_of(registry: &NodeRegistry, interface_id: &NodeId) -> Option<NodeId> {
    let node = registry.find(interface_id)?;
    if node.kind() != NodeKind::Interface {
        return None;
    }

    for link in registry.links() {
        if link.kind == LinkKind::InterfaceAttachment && &link.target == interface_id {
            return Some(link.source.clone());
        }
    }

    node.declared_owner().cloned()
}

/// All interfaces owned by the given switch, in registry order.
pub fn interfaces_of(registry: &NodeRegistry, switch_id: &NodeId) -> Vec<NodeId> {
    registry
        .nodes_of_kind(NodeKind::Interface)
        .filter(|iface| owner_of(registry, &iface.id).as_ref() == Some(switch_id))
        .map(|iface| iface.id.clone())
        .collect()
}
