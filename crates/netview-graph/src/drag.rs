use crate::registry::NodeRegistry;
use crate::resolver;
use netview_core::{NodeId, NodeKind, Vec2};

/// Render radius of a switch circle.
pub const SWITCH_RADIUS: f32 = 20.0;
/// Render radius of an interface circle.
pub const INTERFACE_RADIUS: f32 = 5.0;
/// Render radius of a host circle.
pub const HOST_RADIUS: f32 = 10.0;
/// Distance at which interfaces orbit their owning switch.
pub const INTERFACE_RING_RADIUS: f32 = SWITCH_RADIUS + 10.0;

/// Project `toward` onto the circle of `radius` around `center`.
///
/// The angle is taken from the center to the target point; the result sits
/// on the ring at that angle. A target equal to the center degenerates to
/// angle zero, i.e. the point due east of the center.
pub fn radial_position(center: Vec2, toward: Vec2, radius: f32) -> Vec2 {
    let rad = (toward.y - center.y).atan2(toward.x - center.x);
    Vec2::new(
        center.x + rad.cos() * radius,
        center.y + rad.sin() * radius,
    )
}

#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { id: NodeId, origin: Vec2 },
}

/// Per-gesture drag state machine: `Idle -> Dragging -> Idle`.
///
/// The controller enforces the geometric contract of the view: a switch and
/// its interfaces move as one rigid unit, and an interface can never leave
/// the ring around its owner. Pins set by a gesture stay in place after
/// drag-end; only an explicit release clears them.
#[derive(Debug)]
pub struct DragController {
    ring_radius: f32,
    state: DragState,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    pub fn new() -> Self {
        Self::with_ring_radius(INTERFACE_RING_RADIUS)
    }

    pub fn with_ring_radius(ring_radius: f32) -> Self {
        Self {
            ring_radius,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Begin a gesture on the given node.
    ///
    /// The node is pinned where it currently is. For a switch, every owned
    /// interface is frozen at its current effective position first, so the
    /// group translation that follows starts from a consistent shape.
    pub fn drag_start(&mut self, registry: &mut NodeRegistry, id: &NodeId) {
        let Some(node) = registry.find(id) else {
            return;
        };
        let origin = node.effective_position();
        let kind = node.kind();

        if kind == NodeKind::Switch {
            for iface_id in resolver::interfaces_of(registry, id) {
                if let Some(iface) = registry.find_mut(&iface_id) {
                    iface.pin = Some(iface.effective_position());
                }
            }
        }

        if let Some(node) = registry.find_mut(id) {
            node.pin = Some(origin);
        }
        self.state = DragState::Dragging {
            id: id.clone(),
            origin,
        };
    }

    /// Move the active gesture to the cursor position.
    ///
    /// Moves for a node other than the one the gesture started on are
    /// ignored, as are moves without a preceding start.
    pub fn drag_move(&mut self, registry: &mut NodeRegistry, id: &NodeId, cursor: Vec2) {
        match &self.state {
            DragState::Dragging { id: active, .. } if active == id => {}
            _ => {
                tracing::trace!(%id, "drag move outside an active gesture, ignored");
                return;
            }
        }
        let Some(node) = registry.find(id) else {
            return;
        };

        match node.kind() {
            NodeKind::Switch => {
                let previous = node.effective_position();
                let delta = Vec2::new(cursor.x - previous.x, cursor.y - previous.y);

                let owned = resolver::interfaces_of(registry, id);
                if let Some(node) = registry.find_mut(id) {
                    node.pin = Some(cursor);
                }
                for iface_id in owned {
                    if let Some(iface) = registry.find_mut(&iface_id) {
                        let base = iface.effective_position();
                        iface.pin = Some(Vec2::new(base.x + delta.x, base.y + delta.y));
                    }
                }
            }
            NodeKind::Interface => {
                let center = resolver::owner_of(registry, id)
                    .and_then(|owner| registry.find(&owner))
                    .map(|owner| owner.effective_position());
                if let Some(node) = registry.find_mut(id) {
                    node.pin = Some(match center {
                        // Constrained to the ring around the owner.
                        Some(center) => radial_position(center, cursor, self.ring_radius),
                        // Orphan interface: nothing to anchor to.
                        None => cursor,
                    });
                }
            }
            NodeKind::Host => {
                if let Some(node) = registry.find_mut(id) {
                    node.pin = Some(cursor);
                }
            }
        }
    }

    /// End the gesture. Pins stay in place; the node remains fixed until an
    /// explicit [`DragController::release`].
    pub fn drag_end(&mut self, id: &NodeId) {
        if let DragState::Dragging { id: active, .. } = &self.state {
            if active == id {
                self.state = DragState::Idle;
            }
        }
    }

    /// Clear the node's pin, returning it to automatic layout. For a switch
    /// this also releases every owned interface. Releasing a node that is
    /// not pinned (or unknown) is a no-op.
    pub fn release(&self, registry: &mut NodeRegistry, id: &NodeId) {
        let Some(node) = registry.find(id) else {
            return;
        };
        let kind = node.kind();

        if let Some(node) = registry.find_mut(id) {
            node.pin = None;
        }
        if kind == NodeKind::Switch {
            for iface_id in resolver::interfaces_of(registry, id) {
                if let Some(iface) = registry.find_mut(&iface_id) {
                    iface.pin = None;
                }
            }
        }
    }

    /// The coordinate a node renders at. Interfaces are re-projected onto
    /// the ring around their owner every time, which is what keeps the
    /// radial invariant true even while the free positions drift.
    pub fn effective_position(&self, registry: &NodeRegistry, id: &NodeId) -> Option<Vec2> {
        let node = registry.find(id)?;
        let own = node.effective_position();
        if node.kind() != NodeKind::Interface {
            return Some(own);
        }
        let center = resolver::owner_of(registry, id)
            .and_then(|owner| registry.find(&owner))
            .map(|owner| owner.effective_position());
        Some(match center {
            Some(center) => radial_position(center, own, self.ring_radius),
            None => own,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netview_core::{HostInfo, InterfaceInfo, Link, LinkKind, Node, SwitchInfo};

    fn topology_with(radius_anchor: Vec2) -> (NodeRegistry, NodeId, NodeId) {
        let mut registry = NodeRegistry::new();
        let mut sw = Node::switch(
            "s1",
            SwitchInfo {
                name: "s1".into(),
                dpid: "s1".into(),
                ..Default::default()
            },
        );
        sw.position = radius_anchor;
        let iface = Node::interface("i1", InterfaceInfo::default());
        registry.upsert(
            vec![sw, iface],
            vec![Link::new("s1", "i1", LinkKind::InterfaceAttachment)],
        );
        (registry, NodeId::new("s1"), NodeId::new("i1"))
    }

    #[test]
    fn switch_drag_translates_interfaces_rigidly() {
        // s1 at (100,100), i1 pinned at (125,100), a 25-unit ring.
        let (mut registry, s1, i1) = topology_with(Vec2::new(100.0, 100.0));
        registry.find_mut(&i1).unwrap().pin = Some(Vec2::new(125.0, 100.0));

        let mut drag = DragController::with_ring_radius(25.0);
        drag.drag_start(&mut registry, &s1);
        drag.drag_move(&mut registry, &s1, Vec2::new(150.0, 120.0));
        drag.drag_end(&s1);

        assert_eq!(
            registry.find(&s1).unwrap().pin,
            Some(Vec2::new(150.0, 120.0))
        );
        assert_eq!(
            registry.find(&i1).unwrap().pin,
            Some(Vec2::new(175.0, 120.0))
        );
        assert!(!drag.is_dragging());
    }

    #[test]
    fn switch_drag_pins_unpinned_interfaces_before_moving_them() {
        let (mut registry, s1, i1) = topology_with(Vec2::new(0.0, 0.0));
        registry.find_mut(&i1).unwrap().position = Vec2::new(30.0, 0.0);

        let mut drag = DragController::new();
        drag.drag_start(&mut registry, &s1);
        // drag_start froze the interface at its current position.
        assert_eq!(
            registry.find(&i1).unwrap().pin,
            Some(Vec2::new(30.0, 0.0))
        );

        drag.drag_move(&mut registry, &s1, Vec2::new(10.0, 5.0));
        assert_eq!(
            registry.find(&i1).unwrap().pin,
            Some(Vec2::new(40.0, 5.0))
        );
    }

    #[test]
    fn interface_drag_is_constrained_to_the_ring() {
        let (mut registry, _s1, i1) = topology_with(Vec2::new(0.0, 0.0));

        let mut drag = DragController::new();
        drag.drag_start(&mut registry, &i1);
        // Cursor far outside the ring, straight up.
        drag.drag_move(&mut registry, &i1, Vec2::new(0.0, 500.0));

        let pin = registry.find(&i1).unwrap().pin.unwrap();
        assert!((pin.x - 0.0).abs() < 1e-4);
        assert!((pin.y - INTERFACE_RING_RADIUS).abs() < 1e-4);
    }

    #[test]
    fn interface_ring_follows_pinned_owner() {
        let (mut registry, s1, i1) = topology_with(Vec2::new(0.0, 0.0));
        registry.find_mut(&s1).unwrap().pin = Some(Vec2::new(200.0, 0.0));

        let mut drag = DragController::new();
        drag.drag_start(&mut registry, &i1);
        drag.drag_move(&mut registry, &i1, Vec2::new(500.0, 0.0));

        let pin = registry.find(&i1).unwrap().pin.unwrap();
        assert!((pin.x - (200.0 + INTERFACE_RING_RADIUS)).abs() < 1e-3);
        assert!(pin.y.abs() < 1e-3);
    }

    #[test]
    fn host_drag_is_unconstrained() {
        let mut registry = NodeRegistry::new();
        registry.upsert(vec![Node::host("h1", HostInfo::default())], vec![]);
        let h1 = NodeId::new("h1");

        let mut drag = DragController::new();
        drag.drag_start(&mut registry, &h1);
        drag.drag_move(&mut registry, &h1, Vec2::new(-77.5, 12.25));

        assert_eq!(
            registry.find(&h1).unwrap().pin,
            Some(Vec2::new(-77.5, 12.25))
        );
    }

    #[test]
    fn release_clears_switch_and_interface_pins_and_is_idempotent() {
        let (mut registry, s1, i1) = topology_with(Vec2::new(0.0, 0.0));

        let mut drag = DragController::new();
        drag.drag_start(&mut registry, &s1);
        drag.drag_move(&mut registry, &s1, Vec2::new(50.0, 50.0));
        drag.drag_end(&s1);
        assert!(registry.find(&s1).unwrap().is_pinned());
        assert!(registry.find(&i1).unwrap().is_pinned());

        drag.release(&mut registry, &s1);
        assert!(!registry.find(&s1).unwrap().is_pinned());
        assert!(!registry.find(&i1).unwrap().is_pinned());

        // Second release: no error, no state change.
        drag.release(&mut registry, &s1);
        assert!(!registry.find(&s1).unwrap().is_pinned());
        assert!(!registry.find(&i1).unwrap().is_pinned());
    }

    #[test]
    fn moves_without_a_gesture_are_ignored() {
        let (mut registry, s1, _i1) = topology_with(Vec2::new(0.0, 0.0));

        let mut drag = DragController::new();
        drag.drag_move(&mut registry, &s1, Vec2::new(99.0, 99.0));
        assert_eq!(registry.find(&s1).unwrap().pin, None);

        // A gesture on one node does not accept moves for another. Starting
        // on s1 froze i1 at its current spot; the stray move must leave
        // that freeze untouched rather than chase the cursor.
        drag.drag_start(&mut registry, &s1);
        let stray = NodeId::new("i1");
        drag.drag_move(&mut registry, &stray, Vec2::new(99.0, 99.0));
        assert_eq!(
            registry.find(&stray).unwrap().pin,
            Some(Vec2::new(0.0, 0.0))
        );
    }

    #[test]
    fn drag_start_on_unknown_id_is_a_no_op() {
        let mut registry = NodeRegistry::new();
        let mut drag = DragController::new();
        drag.drag_start(&mut registry, &NodeId::new("ghost"));
        assert!(!drag.is_dragging());
    }

    #[test]
    fn effective_position_reprojects_interfaces() {
        let (mut registry, s1, i1) = topology_with(Vec2::new(10.0, 20.0));
        registry.find_mut(&i1).unwrap().position = Vec2::new(500.0, 20.0);

        let drag = DragController::new();
        let sw_pos = drag.effective_position(&registry, &s1).unwrap();
        let if_pos = drag.effective_position(&registry, &i1).unwrap();

        let dist = sw_pos.distance(if_pos);
        assert!((dist - INTERFACE_RING_RADIUS).abs() < 1e-3);
    }
}
