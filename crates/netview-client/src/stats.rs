use crate::endpoints::Endpoints;
use crate::error::ClientError;
use serde::Deserialize;

/// Stats responses arrive wrapped in a `data` envelope.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
pub struct RawPortStats {
    pub port: u32,
    #[serde(default)]
    pub name: String,
    /// Bits per second, absent when the port is down.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Fraction of capacity, 0.0..=1.0.
    #[serde(default)]
    pub rx_util: f64,
    #[serde(default)]
    pub tx_util: f64,
}

/// Port stats shaped for display: utilization as a percentage rounded to
/// two decimals, speed in Gbps.
#[derive(Debug, Clone, PartialEq)]
pub struct PortUtilization {
    pub port: u32,
    pub name: String,
    pub speed_gbps: Option<f64>,
    pub rx_percent: f64,
    pub tx_percent: f64,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl From<RawPortStats> for PortUtilization {
    fn from(raw: RawPortStats) -> Self {
        Self {
            port: raw.port,
            name: raw.name,
            speed_gbps: raw.speed.map(|bps| bps / 1e9),
            rx_percent: round2(raw.rx_util * 100.0),
            tx_percent: round2(raw.tx_util * 100.0),
        }
    }
}

/// Paired rx/tx percentage series over the switch's ports, ready to plot.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarSeries {
    pub labels: Vec<String>,
    pub rx: Vec<f64>,
    pub tx: Vec<f64>,
}

pub fn radar_series(ports: &[PortUtilization]) -> RadarSeries {
    RadarSeries {
        labels: ports.iter().map(|p| p.name.clone()).collect(),
        rx: ports.iter().map(|p| p.rx_percent).collect(),
        tx: ports.iter().map(|p| p.tx_percent).collect(),
    }
}

#[derive(Debug, Deserialize)]
pub struct RawFlow {
    pub id: String,
    #[serde(default)]
    pub table_id: Option<u32>,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(default)]
    pub byte_count: Option<u64>,
    #[serde(default)]
    pub packet_count: Option<u64>,
}

/// Flow entry shaped for the table view. Full flow ids are hashes; the
/// display keeps the first seven characters.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSummary {
    pub short_id: String,
    pub table_id: Option<u32>,
    pub priority: Option<u32>,
    pub byte_count: Option<u64>,
    pub packet_count: Option<u64>,
}

impl From<RawFlow> for FlowSummary {
    fn from(raw: RawFlow) -> Self {
        Self {
            short_id: raw.id.chars().take(7).collect(),
            table_id: raw.table_id,
            priority: raw.priority,
            byte_count: raw.byte_count,
            packet_count: raw.packet_count,
        }
    }
}

/// Per-switch statistics fetcher.
pub struct StatsClient {
    agent: ureq::Agent,
    endpoints: Endpoints,
}

impl StatsClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self {
            agent: crate::agent(),
            endpoints,
        }
    }

    pub fn ports(&self, dpid: &str) -> Result<Vec<PortUtilization>, ClientError> {
        let envelope: Envelope<Vec<RawPortStats>> = self
            .agent
            .get(&self.endpoints.port_stats(dpid))
            .call()?
            .into_json()?;
        Ok(envelope.data.into_iter().map(Into::into).collect())
    }

    pub fn flows(&self, dpid: &str) -> Result<Vec<FlowSummary>, ClientError> {
        let envelope: Envelope<Vec<RawFlow>> = self
            .agent
            .get(&self.endpoints.flow_stats(dpid))
            .call()?
            .into_json()?;
        Ok(envelope.data.into_iter().map(Into::into).collect())
    }
}
