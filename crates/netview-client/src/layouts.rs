use crate::endpoints::Endpoints;
use crate::error::ClientError;
use netview_graph::LayoutSnapshot;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Named-layout persistence. The controller-backed store and the in-memory
/// store are interchangeable behind this seam; the orchestrator only sees
/// the trait.
pub trait LayoutBackend {
    fn list(&self) -> Result<Vec<String>, ClientError>;
    fn fetch(&self, name: &str) -> Result<LayoutSnapshot, ClientError>;
    /// Saving under an existing name overwrites it.
    fn save(&self, name: &str, snapshot: &LayoutSnapshot) -> Result<(), ClientError>;
}

/// Layout store backed by the controller's layouts endpoint.
pub struct LayoutStore {
    agent: ureq::Agent,
    endpoints: Endpoints,
}

impl LayoutStore {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            agent: crate::agent(),
            endpoints,
        }
    }
}

impl LayoutBackend for LayoutStore {
    fn list(&self) -> Result<Vec<String>, ClientError> {
        let names: Vec<String> = self
            .agent
            .get(&self.endpoints.layouts())
            .call()?
            .into_json()?;
        Ok(names)
    }

    fn fetch(&self, name: &str) -> Result<LayoutSnapshot, ClientError> {
        let result = self.agent.get(&self.endpoints.layout(name)).call();
        match result {
            Ok(resp) => Ok(resp.into_json()?),
            Err(ureq::Error::Status(404, _)) => {
                Err(ClientError::LayoutNotFound(name.to_string()))
            }
            Err(other) => Err(other.into()),
        }
    }

    fn save(&self, name: &str, snapshot: &LayoutSnapshot) -> Result<(), ClientError> {
        self.agent
            .post(&self.endpoints.layout(name))
            .send_json(snapshot)?;
        tracing::info!(name, "layout saved");
        Ok(())
    }
}

/// Process-local layout store. Used by the CLI when no controller is
/// configured and by orchestrator tests.
#[derive(Default)]
pub struct MemoryLayoutStore {
    layouts: Mutex<BTreeMap<String, LayoutSnapshot>>,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutBackend for MemoryLayoutStore {
    fn list(&self) -> Result<Vec<String>, ClientError> {
        let layouts = self.layouts.lock().unwrap_or_else(|e| e.into_inner());
        Ok(layouts.keys().cloned().collect())
    }

    fn fetch(&self, name: &str) -> Result<LayoutSnapshot, ClientError> {
        let layouts = self.layouts.lock().unwrap_or_else(|e| e.into_inner());
        layouts
            .get(name)
            .cloned()
            .ok_or_else(|| ClientError::LayoutNotFound(name.to_string()))
    }

    fn save(&self, name: &str, snapshot: &LayoutSnapshot) -> Result<(), ClientError> {
        let mut layouts = self.layouts.lock().unwrap_or_else(|e| e.into_inner());
        layouts.insert(name.to_string(), snapshot.clone());
        Ok(())
    }
}
