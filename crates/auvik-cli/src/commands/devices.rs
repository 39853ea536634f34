//! Device inventory command handlers.

use tabled::Tabled;

use auvik_core::{InventorySummary, NetworkRow, OfflineDevice, Reporter};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output::{self, Renderer};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct OfflineRow {
    #[tabled(rename = "Device")]
    name: String,
    #[tabled(rename = "Last Seen")]
    last_seen: String,
    #[tabled(rename = "Network")]
    network: String,
}

impl From<&OfflineDevice> for OfflineRow {
    fn from(device: &OfflineDevice) -> Self {
        Self {
            name: device.name.clone(),
            last_seen: device.last_seen.clone(),
            network: device.network.clone(),
        }
    }
}

#[derive(Tabled)]
struct NetworkTableRow {
    #[tabled(rename = "Network")]
    name: String,
    #[tabled(rename = "Id")]
    id: String,
}

impl From<&NetworkRow> for NetworkTableRow {
    fn from(network: &NetworkRow) -> Self {
        Self {
            name: network.name.clone(),
            id: network.id.clone(),
        }
    }
}

#[derive(Tabled)]
struct InventoryRow {
    #[tabled(rename = "Device Type")]
    device_type: String,
    #[tabled(rename = "Count")]
    count: u32,
}

fn inventory_table(summary: &InventorySummary) -> String {
    let rows: Vec<InventoryRow> = summary
        .iter()
        .map(|(device_type, count)| InventoryRow {
            device_type: device_type.clone(),
            count: *count,
        })
        .collect();
    output::table(&rows)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    reporter: &Reporter,
    args: DevicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = Renderer::new(global);
    match args.command {
        DevicesCommand::Offline { domain } => {
            let devices = reporter.offline_devices(&domain).await?;
            if devices.is_empty() {
                out.note(&format!("No offline devices for '{domain}'"));
                return Ok(());
            }
            out.list(&devices, |device| OfflineRow::from(device), |device| device.name.clone());
            Ok(())
        }

        DevicesCommand::Inventory { domain } => {
            let summary = reporter.device_inventory(&domain).await?;
            out.single(&summary, inventory_table, |summary| {
                summary
                    .iter()
                    .map(|(device_type, count)| format!("{device_type}\t{count}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            });
            Ok(())
        }

        DevicesCommand::Networks { domain } => {
            let networks = reporter.networks(&domain).await?;
            if networks.is_empty() {
                out.note(&format!("No networks discovered for '{domain}'"));
                return Ok(());
            }
            out.list(&networks, |network| NetworkTableRow::from(network), |network| network.name.clone());
            Ok(())
        }
    }
}
