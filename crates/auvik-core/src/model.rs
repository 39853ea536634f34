// ── Report domain types ──
//
// Rows and payloads produced by the aggregation passes. Everything here
// serializes to the exact JSON shape consumed by the report templates, so
// field renames are part of the contract, not cosmetics.

use auvik_api::types::TenantEntity;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Per-type device counts for the inventory summary.
pub type InventorySummary = IndexMap<String, u32>;

/// A client tenant resolved through the tenant directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    /// Domain prefix -- the stable key users type and cache files use.
    pub domain: String,
    /// Display name shown on reports.
    pub name: String,
}

impl From<TenantEntity> for Tenant {
    fn from(entity: TenantEntity) -> Self {
        Self {
            id: entity.id,
            domain: entity.attributes.domain_prefix,
            name: entity.attributes.display_name,
        }
    }
}

/// Joined utilization averages for one device, keyed by device id during
/// the join. A `None` means the device never reported that metric.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceStats {
    pub id: String,
    pub name: String,
    pub cpu: Option<f64>,
    pub memory: Option<f64>,
    pub storage: Option<f64>,
}

/// One row of the unhealthy-devices table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRow {
    pub name: String,
    pub cpu: Option<f64>,
    pub memory: Option<f64>,
    pub storage: Option<f64>,
    pub health: f64,
}

/// One row of the bandwidth table. Serialized keys are the template's
/// column headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandwidthRow {
    #[serde(rename = "Device")]
    pub device: String,
    #[serde(rename = "Type")]
    pub device_type: String,
    #[serde(rename = "TX")]
    pub tx: f64,
    #[serde(rename = "RX")]
    pub rx: f64,
    #[serde(rename = "Total")]
    pub total: f64,
    #[serde(rename = "Top Interface")]
    pub top_interface: String,
    #[serde(rename = "Average Utilization")]
    pub top_utilization: f64,
}

/// The four report sections, as cached on disk and rendered into the
/// final document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPayload {
    pub uptime: IndexMap<String, f64>,
    pub alerts: IndexMap<String, u32>,
    pub bandwidth: Vec<BandwidthRow>,
    pub health: Vec<HealthRow>,
}

/// One entry of the broadcast top list, resolved to human names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopBroadcaster {
    /// Device the interface belongs to.
    pub parent: String,
    pub parent_type: String,
    /// Network the parent sits on, or `"Multiple"` / `"None"`.
    pub network: String,
    pub interface: String,
    /// Mean broadcast packet rate over the window, packets/s.
    pub average: f64,
}

/// A discovered network, resolved to a displayable name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRow {
    #[serde(rename = "network_id")]
    pub id: String,
    /// `"No Name"` when the operator never labelled the network.
    #[serde(rename = "network_name")]
    pub name: String,
}

/// A device currently reported offline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineDevice {
    #[serde(rename = "deviceName")]
    pub name: String,
    /// Last check-in, reformatted for display; the raw wire value when it
    /// does not parse, `"Never"` when absent.
    #[serde(rename = "lastSeen")]
    pub last_seen: String,
    #[serde(rename = "deviceNetwork")]
    pub network: String,
}

/// The rendered report artifact written under `output/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Tenant display name.
    pub name: String,
    /// Report month, e.g. `"January 2026"`.
    pub date: String,
    pub uptime: IndexMap<String, f64>,
    pub alerts: IndexMap<String, u32>,
    pub bandwidth: Vec<BandwidthRow>,
    pub health: Vec<HealthRow>,
}
