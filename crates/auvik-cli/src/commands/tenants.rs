//! Tenant directory command handlers.

use tabled::Tabled;

use auvik_core::{Reporter, Tenant};

use crate::cli::{GlobalOpts, TenantsArgs, TenantsCommand};
use crate::error::CliError;
use crate::output::Renderer;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct TenantRow {
    #[tabled(rename = "Domain")]
    domain: String,
    #[tabled(rename = "Name")]
    name: String,
}

impl From<&Tenant> for TenantRow {
    fn from(tenant: &Tenant) -> Self {
        Self {
            domain: tenant.domain.clone(),
            name: tenant.name.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    reporter: &Reporter,
    args: TenantsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let out = Renderer::new(global);
    match args.command {
        TenantsCommand::List => {
            let tenants = reporter.tenants().await?;
            out.list(&tenants, |tenant| TenantRow::from(tenant), |tenant| tenant.domain.clone());
            Ok(())
        }

        TenantsCommand::Sync => {
            let tenants = reporter.sync_tenants().await?;
            out.note(&format!("Tenant directory synced: {} tenants", tenants.len()));
            Ok(())
        }
    }
}
