//! Broadcast top-10 command handler.

use tabled::Tabled;

use auvik_core::{Reporter, TopBroadcaster};

use crate::cli::{BroadcastersArgs, GlobalOpts};
use crate::error::CliError;
use crate::output::Renderer;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BroadcasterRow {
    #[tabled(rename = "Device")]
    parent: String,
    #[tabled(rename = "Type")]
    parent_type: String,
    #[tabled(rename = "Network")]
    network: String,
    #[tabled(rename = "Interface")]
    interface: String,
    #[tabled(rename = "Broadcast pkts/s")]
    average: String,
}

impl From<&TopBroadcaster> for BroadcasterRow {
    fn from(entry: &TopBroadcaster) -> Self {
        Self {
            parent: entry.parent.clone(),
            parent_type: entry.parent_type.clone(),
            network: entry.network.clone(),
            interface: entry.interface.clone(),
            average: format!("{:.2}", entry.average),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    reporter: &Reporter,
    args: BroadcastersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let ranked = reporter.top_broadcasters(&args.domain).await?;
    let out = Renderer::new(global);

    if ranked.is_empty() {
        out.note(&format!(
            "No qualifying broadcast interfaces for '{}'",
            args.domain
        ));
        return Ok(());
    }

    out.list(&ranked, |entry| BroadcasterRow::from(entry), |entry| entry.interface.clone());
    Ok(())
}
