use crate::endpoints::Endpoints;

/// Controller liveness probe. Failure is a state, not an error: the poll
/// loop reports it and tries again next tick.
pub struct StatusClient {
    agent: ureq::Agent,
    endpoints: Endpoints,
}

impl StatusClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            agent: crate::agent(),
            endpoints,
        }
    }

    pub fn check(&self) -> bool {
        match self.agent.get(&self.endpoints.status()).call() {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(error = %err, "controller status check failed");
                false
            }
        }
    }
}
