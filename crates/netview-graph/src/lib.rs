//! View-state graph for the dashboard: the live node registry, drag
//! constraints, visibility filtering and layout snapshots.

pub mod drag;
pub mod registry;
pub mod resolver;
pub mod snapshot;
pub mod visibility;

pub use drag::{DragController, DragState, INTERFACE_RING_RADIUS, SWITCH_RADIUS};
pub use registry::NodeRegistry;
pub use snapshot::{LayoutSnapshot, NodeState, ViewSettings};
