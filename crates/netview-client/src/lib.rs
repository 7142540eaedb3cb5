//! REST collaborators for the controller: topology feed, layout store,
//! per-switch statistics, liveness checks, plus the log-channel console
//! model.
//!
//! All calls are blocking and meant to run on a poll thread or be driven
//! from the CLI.

use std::time::Duration;

pub mod endpoints;
pub mod error;
pub mod layouts;
pub mod logs;
pub mod stats;
pub mod status;
pub mod topology;
pub mod wire;

pub use endpoints::Endpoints;
pub use error::ClientError;
pub use layouts::{LayoutBackend, LayoutStore, MemoryLayoutStore};
pub use logs::{LogConsole, MAX_LOG_LINES};
pub use stats::{radar_series, FlowSummary, PortUtilization, RadarSeries, StatsClient};
pub use status::StatusClient;
pub use topology::TopologyClient;

const REQUEST_TIMEOUT_SECS: u64 = 10;

pub(crate) fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
}
