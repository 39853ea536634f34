// Availability rollup: mean uptime percentage per device type.

use auvik_api::types::DeviceStatEntity;
use indexmap::IndexMap;

use crate::aggregate::{display_label, round_to};

/// Device types the uptime section tracks. Anything else (printers,
/// workstations, unknowns) is noise at this level.
const TRACKED_TYPES: [&str; 8] = [
    "firewall",
    "router",
    "switch",
    "stack",
    "accessPoint",
    "server",
    "camera",
    "storage",
];

/// Pools every availability sample under its device-type label and
/// averages per type, rounded to three places. Labels appear in
/// first-seen order; a type whose devices have no samples never appears.
#[must_use]
pub fn uptime_by_type(devices: &[DeviceStatEntity]) -> IndexMap<String, f64> {
    let mut pooled: IndexMap<String, (f64, u32)> = IndexMap::new();
    for device in devices {
        let device_type = device.device().device_type.as_str();
        if !TRACKED_TYPES.contains(&device_type) {
            continue;
        }
        let samples = device.samples();
        if samples.is_empty() {
            continue;
        }
        let entry = pooled.entry(display_label(device_type)).or_insert((0.0, 0));
        for sample in samples {
            entry.0 += sample.get(1).copied().unwrap_or(0.0);
            entry.1 += 1;
        }
    }
    pooled
        .into_iter()
        .map(|(label, (sum, count))| (label, round_to(sum / f64::from(count), 3)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use auvik_api::types::{
        DeviceRef, DeviceRelationship, DeviceStatRelationships, StatAttributes, StatSeries,
    };
    use pretty_assertions::assert_eq;

    fn availability(device_type: &str, rows: Vec<Vec<f64>>) -> DeviceStatEntity {
        DeviceStatEntity {
            id: "stat1".into(),
            attributes: StatAttributes {
                stats: vec![StatSeries { data: rows }],
            },
            relationships: DeviceStatRelationships {
                device: DeviceRelationship {
                    data: DeviceRef {
                        id: "dev1".into(),
                        device_name: "Device1".into(),
                        device_type: device_type.to_owned(),
                    },
                },
            },
        }
    }

    #[test]
    fn averages_samples_per_type() {
        let devices = vec![
            availability("router", vec![vec![1.0, 90.0], vec![2.0, 100.0]]),
            availability("switch", vec![vec![1.0, 80.0]]),
        ];
        let uptime = uptime_by_type(&devices);
        assert_eq!(uptime["Router"], 95.0);
        assert_eq!(uptime["Switch"], 80.0);
    }

    #[test]
    fn pools_samples_across_devices_of_a_type() {
        // Two routers with uneven sample counts pool into one mean, so the
        // device with more samples weighs more.
        let devices = vec![
            availability("router", vec![vec![1.0, 100.0], vec![2.0, 100.0], vec![3.0, 100.0]]),
            availability("router", vec![vec![1.0, 60.0]]),
        ];
        let uptime = uptime_by_type(&devices);
        assert_eq!(uptime["Router"], 90.0);
    }

    #[test]
    fn access_points_get_the_two_word_label() {
        let devices = vec![availability(
            "accessPoint",
            vec![vec![1.0, 50.0], vec![2.0, 100.0]],
        )];
        let uptime = uptime_by_type(&devices);
        assert_eq!(uptime.get("Access Point"), Some(&75.0));
    }

    #[test]
    fn untracked_types_are_ignored() {
        let devices = vec![availability("workstation", vec![vec![1.0, 99.0]])];
        assert!(uptime_by_type(&devices).is_empty());
    }

    #[test]
    fn sampleless_devices_do_not_create_entries() {
        let devices = vec![availability("camera", vec![])];
        assert!(uptime_by_type(&devices).is_empty());
    }

    #[test]
    fn rounds_to_three_places() {
        let devices = vec![availability(
            "server",
            vec![vec![1.0, 100.0], vec![2.0, 100.0], vec![3.0, 99.0]],
        )];
        let uptime = uptime_by_type(&devices);
        assert_eq!(uptime["Server"], 99.667);
    }
}
