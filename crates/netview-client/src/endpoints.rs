/// URL set of one controller instance.
///
/// Everything hangs off a single base; the default base follows the
/// controller's conventional port and path prefix.
#[derive(Debug, Clone)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Conventional base for a controller reachable at `host`.
    pub fn new(host: &str) -> Self {
        Self::with_base(format!("http://{host}:8181/kytos/"))
    }

    /// Explicit base URL, for non-default ports or reverse proxies.
    pub fn with_base(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn topology(&self) -> String {
        format!("{}topology", self.base)
    }

    pub fn layouts(&self) -> String {
        format!("{}web/topology/layouts/", self.base)
    }

    pub fn layout(&self, name: &str) -> String {
        format!("{}web/topology/layouts/{name}", self.base)
    }

    pub fn port_stats(&self, dpid: &str) -> String {
        format!("{}stats/{dpid}/ports", self.base)
    }

    pub fn flow_stats(&self, dpid: &str) -> String {
        format!("{}stats/{dpid}/flows", self.base)
    }

    pub fn status(&self) -> String {
        format!("{}status/", self.base)
    }
}
