// Device health: join the three utilization fetches per device, score the
// result, and keep the devices worth worrying about.

use auvik_api::types::DeviceStatEntity;
use indexmap::IndexMap;

use crate::aggregate::round_to;
use crate::aggregate::series::column_mean;
use crate::model::{DeviceStats, HealthRow};

/// Devices scoring below this land on the report.
pub const UNHEALTHY_THRESHOLD: f64 = 65.0;

/// Weighted health score. Memory pressure weighs heaviest, storage least.
///
/// A metric the device never reported counts as zero load; a device that
/// reported nothing at all has no score.
#[must_use]
pub fn health_score(stats: &DeviceStats) -> Option<f64> {
    if stats.cpu.is_none() && stats.memory.is_none() && stats.storage.is_none() {
        return None;
    }
    let cpu = stats.cpu.unwrap_or(0.0);
    let memory = stats.memory.unwrap_or(0.0);
    let storage = stats.storage.unwrap_or(0.0);
    Some(100.0 - (0.35 * cpu + 0.4 * memory + 0.25 * storage))
}

/// Joins the cpu, memory, and storage fetches into one record per device,
/// keyed by device id, in first-seen order. Each slot holds the mean of
/// the metric column rounded to two places, `None` when that fetch had no
/// samples for the device.
#[must_use]
pub fn stats_per_device(
    cpu: &[DeviceStatEntity],
    memory: &[DeviceStatEntity],
    storage: &[DeviceStatEntity],
) -> IndexMap<String, DeviceStats> {
    let mut per_device: IndexMap<String, DeviceStats> = IndexMap::new();
    let slots: [(&[DeviceStatEntity], fn(&mut DeviceStats) -> &mut Option<f64>); 3] = [
        (cpu, |record| &mut record.cpu),
        (memory, |record| &mut record.memory),
        (storage, |record| &mut record.storage),
    ];
    for (entities, slot) in slots {
        for entity in entities {
            let device = entity.device();
            let record = per_device
                .entry(device.id.clone())
                .or_insert_with(|| DeviceStats {
                    id: device.id.clone(),
                    name: device.device_name.clone(),
                    cpu: None,
                    memory: None,
                    storage: None,
                });
            *slot(record) = column_mean(entity.samples(), 1).map(|avg| round_to(avg, 2));
        }
    }
    per_device
}

/// Scores every joined record and returns rows for those below
/// [`UNHEALTHY_THRESHOLD`], preserving join order.
#[must_use]
pub fn unhealthy_devices(stats: &IndexMap<String, DeviceStats>) -> Vec<HealthRow> {
    let mut report = Vec::new();
    for device in stats.values() {
        let Some(score) = health_score(device) else {
            continue;
        };
        if score < UNHEALTHY_THRESHOLD {
            report.push(HealthRow {
                name: device.name.clone(),
                cpu: device.cpu,
                memory: device.memory,
                storage: device.storage,
                health: round_to(score, 2),
            });
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use auvik_api::types::{
        DeviceRef, DeviceRelationship, DeviceStatRelationships, StatAttributes, StatSeries,
    };
    use pretty_assertions::assert_eq;

    fn stat_entity(id: &str, name: &str, rows: Vec<Vec<f64>>) -> DeviceStatEntity {
        DeviceStatEntity {
            id: format!("stat-{id}"),
            attributes: StatAttributes {
                stats: vec![StatSeries { data: rows }],
            },
            relationships: DeviceStatRelationships {
                device: DeviceRelationship {
                    data: DeviceRef {
                        id: id.to_owned(),
                        device_name: name.to_owned(),
                        device_type: String::new(),
                    },
                },
            },
        }
    }

    fn record(cpu: Option<f64>, memory: Option<f64>, storage: Option<f64>) -> DeviceStats {
        DeviceStats {
            id: "dev1".into(),
            name: "Router1".into(),
            cpu,
            memory,
            storage,
        }
    }

    #[test]
    fn score_weights_the_three_metrics() {
        let score = health_score(&record(Some(20.0), Some(30.0), Some(40.0)));
        assert_eq!(score, Some(100.0 - (0.35 * 20.0 + 0.4 * 30.0 + 0.25 * 40.0)));
    }

    #[test]
    fn score_is_none_when_nothing_reported() {
        assert_eq!(health_score(&record(None, None, None)), None);
    }

    #[test]
    fn score_treats_missing_metrics_as_zero() {
        assert_eq!(health_score(&record(None, Some(50.0), None)), Some(80.0));
    }

    #[test]
    fn join_aggregates_all_three_metrics() {
        let cpu = vec![stat_entity("dev1", "Router1", vec![vec![1.0, 10.0], vec![2.0, 20.0]])];
        let memory = vec![stat_entity("dev1", "Router1", vec![vec![1.0, 30.0], vec![2.0, 50.0]])];
        let storage = vec![stat_entity("dev1", "Router1", vec![vec![1.0, 40.0], vec![2.0, 60.0]])];

        let joined = stats_per_device(&cpu, &memory, &storage);
        let device = &joined["dev1"];
        assert_eq!(device.name, "Router1");
        assert_eq!(device.cpu, Some(15.0));
        assert_eq!(device.memory, Some(40.0));
        assert_eq!(device.storage, Some(50.0));
    }

    #[test]
    fn join_leaves_missing_metrics_unset() {
        let cpu = vec![stat_entity("dev1", "Router1", vec![])];
        let joined = stats_per_device(&cpu, &[], &[]);
        let device = &joined["dev1"];
        assert_eq!(device.cpu, None);
        assert_eq!(device.memory, None);
        assert_eq!(device.storage, None);
    }

    #[test]
    fn report_includes_low_scores_only() {
        let mut stats = IndexMap::new();
        stats.insert("dev1".to_owned(), record(Some(90.0), Some(90.0), Some(90.0)));
        let report = unhealthy_devices(&stats);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].name, "Router1");
        assert_eq!(report[0].health, 10.0);

        let mut healthy = IndexMap::new();
        healthy.insert("dev1".to_owned(), record(Some(1.0), Some(1.0), Some(1.0)));
        assert_eq!(unhealthy_devices(&healthy), vec![]);
    }

    #[test]
    fn report_skips_devices_without_scores() {
        let mut stats = IndexMap::new();
        stats.insert("dev1".to_owned(), record(None, None, None));
        assert_eq!(unhealthy_devices(&stats), vec![]);
    }
}
