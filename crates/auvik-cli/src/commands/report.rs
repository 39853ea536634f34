//! Report command handler.

use tabled::Tabled;

use auvik_core::{BandwidthRow, HealthRow, ReportDocument, Reporter};

use crate::cli::{GlobalOpts, ReportArgs};
use crate::error::CliError;
use crate::output::{self, Renderer};

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct UptimeTableRow {
    #[tabled(rename = "Device Type")]
    device_type: String,
    #[tabled(rename = "Uptime %")]
    uptime: String,
}

#[derive(Tabled)]
struct AlertTableRow {
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Count")]
    count: u32,
}

#[derive(Tabled)]
struct BandwidthTableRow {
    #[tabled(rename = "Device")]
    device: String,
    #[tabled(rename = "Type")]
    device_type: String,
    #[tabled(rename = "TX (MB)")]
    tx: String,
    #[tabled(rename = "RX (MB)")]
    rx: String,
    #[tabled(rename = "Total (MB)")]
    total: String,
    #[tabled(rename = "Top Interface")]
    top_interface: String,
    #[tabled(rename = "Utilization %")]
    top_utilization: String,
}

impl From<&BandwidthRow> for BandwidthTableRow {
    fn from(row: &BandwidthRow) -> Self {
        Self {
            device: row.device.clone(),
            device_type: row.device_type.clone(),
            tx: format!("{:.2}", row.tx),
            rx: format!("{:.2}", row.rx),
            total: format!("{:.2}", row.total),
            top_interface: row.top_interface.clone(),
            top_utilization: format!("{:.2}", row.top_utilization),
        }
    }
}

#[derive(Tabled)]
struct HealthTableRow {
    #[tabled(rename = "Device")]
    name: String,
    #[tabled(rename = "CPU %")]
    cpu: String,
    #[tabled(rename = "Memory %")]
    memory: String,
    #[tabled(rename = "Storage %")]
    storage: String,
    #[tabled(rename = "Health")]
    health: String,
}

impl From<&HealthRow> for HealthTableRow {
    fn from(row: &HealthRow) -> Self {
        Self {
            name: row.name.clone(),
            cpu: output::opt_metric(row.cpu),
            memory: output::opt_metric(row.memory),
            storage: output::opt_metric(row.storage),
            health: format!("{:.2}", row.health),
        }
    }
}

// ── Table view ──────────────────────────────────────────────────────

/// The four report sections as headed tables.
fn document_tables(document: &ReportDocument, out: &Renderer) -> String {
    let mut sections = Vec::with_capacity(5);

    sections.push(out.heading(&format!("{} — {}", document.name, document.date)));

    let uptime: Vec<UptimeTableRow> = document
        .uptime
        .iter()
        .map(|(device_type, percent)| UptimeTableRow {
            device_type: device_type.clone(),
            uptime: format!("{percent:.3}"),
        })
        .collect();
    sections.push(format!("{}\n{}", out.heading("Uptime"), output::table(&uptime)));

    let alerts: Vec<AlertTableRow> = document
        .alerts
        .iter()
        .map(|(severity, count)| AlertTableRow {
            severity: severity.clone(),
            count: *count,
        })
        .collect();
    sections.push(format!(
        "{}\n{}",
        out.heading("Open Alerts"),
        output::table(&alerts)
    ));

    let bandwidth: Vec<BandwidthTableRow> =
        document.bandwidth.iter().map(BandwidthTableRow::from).collect();
    sections.push(format!(
        "{}\n{}",
        out.heading("Bandwidth"),
        output::table(&bandwidth)
    ));

    if document.health.is_empty() {
        sections.push(format!("{}\nAll devices healthy.", out.heading("Device Health")));
    } else {
        let health: Vec<HealthTableRow> =
            document.health.iter().map(HealthTableRow::from).collect();
        sections.push(format!(
            "{}\n{}",
            out.heading("Device Health"),
            output::table(&health)
        ));
    }

    sections.join("\n\n")
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    reporter: &Reporter,
    args: ReportArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let generated = reporter.generate(&args.domain, args.refresh).await?;
    let document = reporter.render_document(&generated.tenant, &generated.payload);
    let out = Renderer::new(global);

    if !args.no_artifact {
        let path = reporter.write_document(&generated.tenant.domain, &document)?;
        out.note(&format!("Report artifact written to {}", path.display()));
    }
    if generated.from_cache {
        out.note("Served from cache; use --refresh to regenerate");
    }

    out.single(
        &document,
        |d| document_tables(d, &out),
        |_| generated.tenant.domain.clone(),
    );
    Ok(())
}
