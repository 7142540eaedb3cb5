use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use netview_app::{Dashboard, DashboardSettings};
use netview_client::{
    radar_series, Endpoints, LayoutBackend, LayoutStore, StatsClient, StatusClient,
    TopologyClient,
};
use netview_core::NodeKind;

#[derive(Parser)]
#[command(name = "netview", version, about = "Inspect a controller's topology and layouts")]
struct Cli {
    /// Controller host.
    #[arg(long, default_value = "localhost")]
    host: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the topology and print a summary.
    Topology,
    /// List the saved layouts.
    Layouts,
    /// Save the current arrangement under a name.
    Save { name: String },
    /// Restore a saved layout and show what it pinned.
    Restore { name: String },
    /// Port utilization and flows for one switch.
    Stats { dpid: String },
    /// Check whether the controller is up.
    Status,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let endpoints = Endpoints::new(&cli.host);

    match cli.command {
        Command::Topology => {
            let client = TopologyClient::new(endpoints);
            let dash = loaded_dashboard(&client)?;
            for kind in [NodeKind::Switch, NodeKind::Interface, NodeKind::Host] {
                let count = dash.registry.nodes_of_kind(kind).count();
                println!("{kind}: {count}");
            }
            println!("links: {}", dash.registry.links().len());
        }
        Command::Layouts => {
            let store = LayoutStore::new(endpoints);
            let names = store.list()?;
            if names.is_empty() {
                println!("no saved layouts");
            }
            for name in names {
                println!("{name}");
            }
        }
        Command::Save { name } => {
            let client = TopologyClient::new(endpoints.clone());
            let store = LayoutStore::new(endpoints);
            let mut dash = loaded_dashboard(&client)?;
            dash.save_layout(&store, &name);
            finish(&dash)?;
        }
        Command::Restore { name } => {
            let client = TopologyClient::new(endpoints.clone());
            let store = LayoutStore::new(endpoints);
            let mut dash = loaded_dashboard(&client)?;
            dash.restore_layout(&store, &name);
            finish(&dash)?;
            let pinned = dash.registry.nodes().filter(|n| n.is_pinned()).count();
            println!("{pinned} nodes pinned");
        }
        Command::Stats { dpid } => {
            let client = StatsClient::new(endpoints);
            let ports = client.ports(&dpid)?;
            let series = radar_series(&ports);
            for ((label, rx), tx) in series.labels.iter().zip(&series.rx).zip(&series.tx) {
                println!("{label}: rx {rx}% tx {tx}%");
            }
            for flow in client.flows(&dpid)? {
                println!(
                    "flow {} priority {:?} table {:?}",
                    flow.short_id, flow.priority, flow.table_id
                );
            }
        }
        Command::Status => {
            let client = StatusClient::new(endpoints);
            if client.check() {
                println!("controller is up");
            } else {
                bail!("controller is unreachable");
            }
        }
    }

    Ok(())
}

fn loaded_dashboard(client: &TopologyClient) -> Result<Dashboard> {
    let mut dash = Dashboard::new(&DashboardSettings::load());
    dash.load_topology(client);
    finish(&dash)?;
    Ok(dash)
}

fn finish(dash: &Dashboard) -> Result<()> {
    let status = dash.status();
    if status.error {
        bail!("{}", status.message);
    }
    if !status.message.is_empty() {
        println!("{}", status.message);
    }
    Ok(())
}
