// Inventory views: offline device rows and the per-type device census.

use auvik_api::types::{DeviceEntity, NetworkEntity};
use chrono::DateTime;
use indexmap::IndexMap;

use crate::model::{InventorySummary, NetworkRow, OfflineDevice};

/// Reformats a wire timestamp for display. Anything unparseable passes
/// through untouched rather than hiding the evidence.
fn humanize_last_seen(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_owned(),
        |parsed| parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}

/// Builds display rows for offline devices. Devices Auvik has never seen
/// up show `"Never"`; devices without a network membership show `"None"`.
#[must_use]
pub fn offline_rows(devices: &[DeviceEntity]) -> Vec<OfflineDevice> {
    devices
        .iter()
        .map(|device| OfflineDevice {
            name: device.attributes.device_name.clone(),
            last_seen: device
                .attributes
                .last_seen_time
                .as_deref()
                .map_or_else(|| "Never".to_owned(), humanize_last_seen),
            network: device
                .relationships
                .networks
                .data
                .first()
                .map_or_else(
                    || "None".to_owned(),
                    |membership| membership.attributes.network_name.clone(),
                ),
        })
        .collect()
}

/// Pairs each network id with its display name. Unlabelled networks get
/// the `"No Name"` placeholder so every id stays addressable.
#[must_use]
pub fn network_rows(networks: &[NetworkEntity]) -> Vec<NetworkRow> {
    networks
        .iter()
        .map(|network| NetworkRow {
            id: network.id.clone(),
            name: if network.attributes.network_name.is_empty() {
                "No Name".to_owned()
            } else {
                network.attributes.network_name.clone()
            },
        })
        .collect()
}

/// Counts devices per raw `deviceType`, in first-seen order. An empty
/// inventory collapses to the `"No Devices"` placeholder.
#[must_use]
pub fn inventory_summary(devices: &[DeviceEntity]) -> InventorySummary {
    if devices.is_empty() {
        let mut summary = IndexMap::new();
        summary.insert("No Devices".to_owned(), 0);
        return summary;
    }
    let mut summary = IndexMap::new();
    for device in devices {
        *summary
            .entry(device.attributes.device_type.clone())
            .or_insert(0) += 1;
    }
    summary
}
