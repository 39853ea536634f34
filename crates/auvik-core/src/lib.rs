// auvik-core: report aggregation and shared services for the auvik CLI.
//
// This crate owns everything between the wire and the terminal: the
// aggregation passes that reduce raw statistic series to report rows, the
// on-disk tenant directory and report cache, and the `Reporter` facade the
// CLI drives. It performs no terminal I/O and reads no config files; the
// frontend builds a `ServiceConfig` and hands it over.

pub mod aggregate;
pub mod cache;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod store;
pub mod tenants;

// ── Primary re-exports ──

pub use cache::ReportCache;
pub use config::ServiceConfig;
pub use error::CoreError;
pub use model::{
    BandwidthRow, HealthRow, InventorySummary, NetworkRow, OfflineDevice, ReportDocument,
    ReportPayload, Tenant, TopBroadcaster,
};
pub use report::{GeneratedReport, Reporter};
pub use store::JsonStore;
pub use tenants::TenantDirectory;
