use crate::settings::DashboardSettings;
use netview_client::{LayoutBackend, LogConsole, TopologyClient};
use netview_core::{NodeId, Vec2};
use netview_events::{Event, EventBus, EventListener};
use netview_graph::{
    snapshot::LayoutSnapshot, visibility, DragController, NodeRegistry, ViewSettings,
};

/// Last user-facing message. Sticky: it stays until the next operation
/// replaces it, so a failure remains visible across poll ticks.
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    pub message: String,
    pub error: bool,
}

/// The whole dashboard as one explicit context object. Everything the view
/// layer would bind to lives here; there are no globals.
pub struct Dashboard {
    pub registry: NodeRegistry,
    pub drag: DragController,
    pub view: ViewSettings,
    pub console: LogConsole,
    pub active_layout: Option<String>,
    pub layout_names: Vec<String>,
    pub selected_switch: Option<NodeId>,
    status: StatusLine,
    bus: EventBus,
}

impl Dashboard {
    pub fn new(settings: &DashboardSettings) -> Self {
        Self {
            registry: NodeRegistry::new(),
            drag: DragController::new(),
            view: settings.view.clone(),
            console: LogConsole::new(),
            active_layout: None,
            layout_names: Vec::new(),
            selected_switch: None,
            status: StatusLine::default(),
            bus: EventBus::new(),
        }
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    fn set_status(&mut self, message: impl Into<String>, error: bool) {
        let message = message.into();
        if error {
            tracing::warn!(%message, "status");
        } else {
            tracing::info!(%message, "status");
        }
        self.status = StatusLine { message, error };
    }

    fn refresh_visibility(&mut self) {
        visibility::apply_visibility(
            &mut self.registry,
            self.view.show_unused_interfaces,
            self.view.show_disconnected_hosts,
        );
    }

    /// Drain the bus into this dashboard. One pass of the main loop.
    pub fn pump(&mut self) {
        let rx = self.bus.receiver();
        while let Ok(event) = rx.try_recv() {
            self.handle_event(&event);
        }
    }

    /// Drain the bus, executing layout requests against the given store.
    /// The plain listener cannot do persistence I/O; this is the pass a
    /// driver with a backend in hand runs instead of [`Dashboard::pump`].
    pub fn pump_with(&mut self, backend: &dyn LayoutBackend) {
        let rx = self.bus.receiver();
        while let Ok(event) = rx.try_recv() {
            match event {
                Event::SaveLayout { name } => self.save_layout(backend, &name),
                Event::RestoreLayout { name } => self.restore_layout(backend, &name),
                other => self.handle_event(&other),
            }
        }
    }

    /// Fetch the topology and merge it into the working set. Pins survive
    /// the merge for nodes that were already known.
    pub fn load_topology(&mut self, client: &TopologyClient) {
        match client.fetch() {
            Ok((nodes, links)) => {
                self.registry.upsert(nodes, links);
                self.refresh_visibility();
            }
            Err(e) => self.set_status(format!("Topology fetch failed: {e}"), true),
        }
    }

    /// Capture the current arrangement and persist it under `name`.
    pub fn save_layout(&mut self, backend: &dyn LayoutBackend, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.set_status("Enter a name for the layout.", true);
            return;
        }
        let snapshot = LayoutSnapshot::capture(&self.registry, &self.view);
        match backend.save(name, &snapshot) {
            Ok(()) => {
                self.active_layout = Some(name.to_string());
                self.set_status(format!("Layout saved as {name}"), false);
                self.bus.publish(Event::LayoutSaved {
                    name: name.to_string(),
                });
            }
            Err(e) => self.set_status(format!("Failed to save layout {name}: {e}"), true),
        }
    }

    /// Fetch a named layout and overlay it onto the live topology.
    pub fn restore_layout(&mut self, backend: &dyn LayoutBackend, name: &str) {
        match backend.fetch(name) {
            Ok(snapshot) => {
                snapshot.apply(&mut self.registry);
                self.view = snapshot.other_settings.clone();
                self.refresh_visibility();
                self.active_layout = Some(name.to_string());
                self.set_status(format!("Layout {name} restored."), false);
                self.bus.publish(Event::LayoutRestored {
                    name: name.to_string(),
                });
            }
            Err(e) => self.set_status(format!("Failed to restore layout {name}: {e}"), true),
        }
    }

    /// Refresh the known layout names. On failure the last-known list
    /// stays; the next tick retries.
    pub fn refresh_layout_list(&mut self, backend: &dyn LayoutBackend) {
        match backend.list() {
            Ok(names) => self.layout_names = names,
            Err(e) => tracing::warn!(error = %e, "layout list refresh failed"),
        }
    }
}

impl EventListener for Dashboard {
    fn handle_event(&mut self, event: &Event) {
        match event {
            Event::DragStart { id } => self.drag.drag_start(&mut self.registry, id),
            Event::DragMove { id, x, y } => {
                self.drag.drag_move(&mut self.registry, id, Vec2::new(*x, *y))
            }
            Event::DragEnd { id } => self.drag.drag_end(id),
            Event::ReleaseNode { id } => self.drag.release(&mut self.registry, id),

            Event::TopologyLoaded { nodes, links } => {
                self.registry.upsert(nodes.clone(), links.clone());
                self.refresh_visibility();
            }
            Event::TopologyFailed { error } => {
                self.set_status(format!("Topology fetch failed: {error}"), true);
            }

            Event::SetShowUnusedInterfaces(show) => {
                self.view.show_unused_interfaces = *show;
                self.refresh_visibility();
            }
            Event::SetShowDisconnectedHosts(show) => {
                self.view.show_disconnected_hosts = *show;
                self.refresh_visibility();
            }
            Event::SetShowTopology(show) => self.view.show_topology = *show,
            Event::SetShowMap(show) => self.view.show_map = *show,

            Event::SelectSwitch { id } => {
                visibility::highlight_switch(&mut self.registry, id);
                self.selected_switch = Some(id.clone());
            }
            Event::ClearSelection => {
                visibility::highlight_all(&mut self.registry);
                self.selected_switch = None;
            }

            Event::LogBatch { lines, last_line } => self.console.ingest(lines, *last_line),
            Event::LogChannelConnected => self.set_status("Log channel connected.", false),
            Event::LogChannelDisconnected => {
                self.set_status("Log channel disconnected.", true)
            }

            Event::LayoutSaved { .. } | Event::LayoutRestored { .. } => {}
            Event::LayoutListLoaded { names } => self.layout_names = names.clone(),

            Event::StatusUpdate { message, error } => {
                self.set_status(message.clone(), *error)
            }

            // Persistence requests need the layout store; `pump_with`
            // intercepts them before they reach the plain listener.
            Event::SaveLayout { .. } | Event::RestoreLayout { .. } => {}
        }
    }
}
