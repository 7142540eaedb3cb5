use crate::endpoints::Endpoints;
use crate::error::ClientError;
use crate::wire::RawTopology;
use netview_core::{Link, Node};

/// Blocking fetcher for the topology feed.
pub struct TopologyClient {
    agent: ureq::Agent,
    endpoints: Endpoints,
}

impl TopologyClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            agent: crate::agent(),
            endpoints,
        }
    }

    /// Fetch and convert the current topology. Malformed entries are
    /// dropped during conversion; only transport and decode failures
    /// surface as errors.
    pub fn fetch(&self) -> Result<(Vec<Node>, Vec<Link>), ClientError> {
        let raw: RawTopology = self
            .agent
            .get(&self.endpoints.topology())
            .call()?
            .into_json()?;
        let (nodes, links) = raw.into_graph();
        tracing::info!(nodes = nodes.len(), links = links.len(), "topology fetched");
        Ok((nodes, links))
    }
}
