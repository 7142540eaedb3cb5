use crossbeam_channel::{unbounded, Receiver, Sender};
use netview_core::{Link, Node, NodeId};
use serde::{Deserialize, Serialize};

/// Which periodic poll fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollKind {
    Status,
    Logs,
    LayoutList,
}

/// Everything that can happen to the dashboard, decoupled from any UI
/// toolkit's event dispatch. Pointer gestures and network completions
/// arrive through the same bus; poll cadence is the scheduler's own
/// bookkeeping (see `PollKind`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    // Drag gestures
    DragStart {
        id: NodeId,
    },
    DragMove {
        id: NodeId,
        x: f32,
        y: f32,
    },
    DragEnd {
        id: NodeId,
    },
    /// Double-click gesture: clear the node's pin (and, for a switch, the
    /// pins of all its interfaces).
    ReleaseNode {
        id: NodeId,
    },

    // Topology feed
    TopologyLoaded {
        nodes: Vec<Node>,
        links: Vec<Link>,
    },
    TopologyFailed {
        error: String,
    },

    // Layout persistence
    SaveLayout {
        name: String,
    },
    LayoutSaved {
        name: String,
    },
    RestoreLayout {
        name: String,
    },
    LayoutRestored {
        name: String,
    },
    LayoutListLoaded {
        names: Vec<String>,
    },

    // View settings
    SetShowUnusedInterfaces(bool),
    SetShowDisconnectedHosts(bool),
    SetShowTopology(bool),
    SetShowMap(bool),

    // Context selection
    SelectSwitch {
        id: NodeId,
    },
    ClearSelection,

    // Log channel
    LogBatch {
        lines: Vec<String>,
        last_line: u64,
    },
    LogChannelConnected,
    LogChannelDisconnected,

    // Status line
    StatusUpdate {
        message: String,
        error: bool,
    },
}

#[derive(Clone)]
pub struct EventBus {
    tx: Sender<Event>,
    rx: Receiver<Event>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    pub fn sender(&self) -> Sender<Event> {
        self.tx.clone()
    }

    pub fn receiver(&self) -> Receiver<Event> {
        self.rx.clone()
    }

    pub fn publish(&self, event: Event) {
        let _ = self.tx.send(event);
    }

    /// Drain all pending events into a listener. Intended to be called once
    /// per pass of the main event-processing loop.
    pub fn dispatch_to<L: EventListener>(&self, listener: &mut L) {
        while let Ok(event) = self.rx.try_recv() {
            listener.handle_event(&event);
        }
    }
}

/// Trait for components that respond to events.
pub trait EventListener {
    fn handle_event(&mut self, event: &Event);
}
